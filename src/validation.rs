// Input validation for CLI arguments and configuration values

pub mod validators;

use crate::errors::{Result, SnowfallError};

/// Validate a worker count
pub fn validate_worker_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(SnowfallError::invalid_worker_count("0"));
    }
    Ok(())
}

/// Validate the producer interval in milliseconds
pub fn validate_interval_ms(ms: u64) -> Result<()> {
    const MIN_INTERVAL_MS: u64 = 1;
    const MAX_INTERVAL_MS: u64 = 60_000;

    if ms < MIN_INTERVAL_MS || ms > MAX_INTERVAL_MS {
        return Err(SnowfallError::invalid_interval(ms));
    }

    Ok(())
}

/// Validate the exclusive upper bound for produced values
pub fn validate_value_bound(bound: u32) -> Result<()> {
    if bound == 0 {
        return Err(SnowfallError::invalid_value_bound(bound));
    }
    Ok(())
}

/// Validate a monitoring port
pub fn validate_monitoring_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(SnowfallError::invalid_port("0"));
    }
    Ok(())
}
