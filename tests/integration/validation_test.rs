// Integration tests for CLI argument validation

use snowfall::validation::validators;

#[test]
fn test_worker_count_accepts_positive_integers() {
    assert_eq!(validators::parse_worker_count("1").unwrap(), 1);
    assert_eq!(validators::parse_worker_count("3").unwrap(), 3);
    assert_eq!(validators::parse_worker_count("64").unwrap(), 64);
}

#[test]
fn test_worker_count_rejects_zero() {
    assert!(validators::parse_worker_count("0").is_err());
}

#[test]
fn test_worker_count_rejects_negative() {
    assert!(validators::parse_worker_count("-5").is_err());
}

#[test]
fn test_worker_count_rejects_non_numeric() {
    assert!(validators::parse_worker_count("three").is_err());
    assert!(validators::parse_worker_count("").is_err());
    assert!(validators::parse_worker_count("4.5").is_err());
}

#[test]
fn test_worker_count_error_mentions_usage() {
    let err = validators::parse_worker_count("0").unwrap_err();
    assert!(err.contains("positive integer"));
}

#[test]
fn test_interval_bounds() {
    assert!(validators::parse_interval_ms("0").is_err());
    assert_eq!(validators::parse_interval_ms("1").unwrap(), 1);
    assert_eq!(validators::parse_interval_ms("500").unwrap(), 500);
    assert!(validators::parse_interval_ms("60001").is_err());
    assert!(validators::parse_interval_ms("fast").is_err());
}

#[test]
fn test_value_bound() {
    assert!(validators::parse_value_bound("0").is_err());
    assert_eq!(validators::parse_value_bound("100").unwrap(), 100);
    assert!(validators::parse_value_bound("lots").is_err());
}

#[test]
fn test_log_level() {
    for level in ["trace", "debug", "info", "warn", "error"] {
        assert_eq!(validators::parse_log_level(level).unwrap(), level);
    }
    assert!(validators::parse_log_level("verbose").is_err());
}

#[test]
fn test_log_format() {
    assert_eq!(validators::parse_log_format("text").unwrap(), "text");
    assert_eq!(validators::parse_log_format("json").unwrap(), "json");
    assert!(validators::parse_log_format("xml").is_err());
}
