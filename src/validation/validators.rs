// src/validation/validators.rs
//
// Validation functions for command-line arguments

/// Parse and validate a worker count string
pub fn parse_worker_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => {
            Err("Worker count must be a positive integer (e.g. 4)".to_string())
        }
        Ok(n) => Ok(n),
    }
}

/// Parse and validate a producer interval in milliseconds
pub fn parse_interval_ms(s: &str) -> Result<u64, String> {
    let ms = s
        .parse::<u64>()
        .map_err(|_| "Interval must be a number of milliseconds".to_string())?;
    super::validate_interval_ms(ms).map_err(|e| e.to_string())?;
    Ok(ms)
}

/// Parse and validate the exclusive upper bound for produced values
pub fn parse_value_bound(s: &str) -> Result<u32, String> {
    let bound = s
        .parse::<u32>()
        .map_err(|_| "Value bound must be a whole number".to_string())?;
    super::validate_value_bound(bound).map_err(|e| e.to_string())?;
    Ok(bound)
}

/// Validate a log level string
pub fn parse_log_level(s: &str) -> Result<String, String> {
    match s {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(s.to_string()),
        _ => Err("Log level must be one of: trace, debug, info, warn, error".to_string()),
    }
}

/// Validate a log format string
pub fn parse_log_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err("Log format must be 'text' or 'json'".to_string()),
    }
}
