// Custom error types for Snowfall with error codes for programmatic handling

use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration errors (1000-1999)
    InvalidWorkerCount = 1000,
    InvalidInterval = 1001,
    InvalidValueBound = 1002,
    InvalidPort = 1003,
    ConfigFileNotFound = 1004,
    ConfigParseFailed = 1005,

    /// Internal errors (5000-5999)
    ChannelClosed = 5000,
    TaskPanic = 5001,

    /// Generic error
    Unknown = 9999,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Main error type for Snowfall operations
#[derive(Error, Debug)]
pub enum SnowfallError {
    #[error("Invalid configuration: {message} (code: {code})")]
    Config {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message} (code: {code})")]
    Internal {
        message: String,
        code: ErrorCode,
    },
}

impl SnowfallError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SnowfallError::Config { code, .. } => *code,
            SnowfallError::Internal { code, .. } => *code,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            SnowfallError::Config { code: ErrorCode::InvalidWorkerCount, .. } => {
                Some("Worker count must be a positive integer, e.g. `snowfall 4`")
            }
            SnowfallError::Config { code: ErrorCode::InvalidInterval, .. } => {
                Some("Producer interval should be between 1 and 60000 milliseconds")
            }
            SnowfallError::Config { code: ErrorCode::InvalidValueBound, .. } => {
                Some("Value bound must be at least 1 (values are drawn from [0, bound))")
            }
            SnowfallError::Config { code: ErrorCode::InvalidPort, .. } => {
                Some("Port must be between 1 and 65535")
            }
            _ => None,
        }
    }
}

// Helper functions for creating errors
impl SnowfallError {
    pub fn invalid_worker_count(raw: &str) -> Self {
        SnowfallError::Config {
            message: format!("Invalid worker count: {}", raw),
            code: ErrorCode::InvalidWorkerCount,
            source: None,
        }
    }

    pub fn invalid_interval(ms: u64) -> Self {
        SnowfallError::Config {
            message: format!("Invalid producer interval: {} ms", ms),
            code: ErrorCode::InvalidInterval,
            source: None,
        }
    }

    pub fn invalid_value_bound(bound: u32) -> Self {
        SnowfallError::Config {
            message: format!("Invalid value bound: {}", bound),
            code: ErrorCode::InvalidValueBound,
            source: None,
        }
    }

    pub fn invalid_port(port_str: &str) -> Self {
        SnowfallError::Config {
            message: format!("Invalid port number: {}", port_str),
            code: ErrorCode::InvalidPort,
            source: None,
        }
    }

    pub fn channel_closed(channel_name: &str) -> Self {
        SnowfallError::Internal {
            message: format!("Channel closed unexpectedly: {}", channel_name),
            code: ErrorCode::ChannelClosed,
        }
    }

    pub fn task_panic(task_name: &str) -> Self {
        SnowfallError::Internal {
            message: format!("Task panicked: {}", task_name),
            code: ErrorCode::TaskPanic,
        }
    }
}

/// Result type alias for Snowfall operations
pub type Result<T> = std::result::Result<T, SnowfallError>;
