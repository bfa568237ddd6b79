//! Error types for the sporty CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SportyError>;

/// Exit code for invalid or conflicting command-line options.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for every runtime failure (network, provider, payload).
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the user interrupts a pending request.
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Error, Debug)]
pub enum SportyError {
    #[error("{message}")]
    Usage { message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimit { message: String },

    #[error("Provider error{}: {message}", http_suffix(.status))]
    Provider { status: Option<u16>, message: String },

    #[error("Malformed provider payload: missing field `{field}`")]
    Mapping { field: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Interrupted")]
    Interrupted,
}

fn http_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl SportyError {
    pub fn usage(message: impl Into<String>) -> Self {
        SportyError::Usage {
            message: message.into(),
        }
    }

    pub fn mapping(field: impl Into<String>) -> Self {
        SportyError::Mapping {
            field: field.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SportyError::Usage { .. } => EXIT_USAGE,
            SportyError::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
        }
    }
}
