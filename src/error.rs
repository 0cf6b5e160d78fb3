//! Error handling module
//!
//! Centralized error types for the demo driver.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Scenario step {step} has no open account")]
    NoOpenAccount { step: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

impl AppError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Domain(domain_err) => domain_err.code(),
            AppError::NoOpenAccount { .. } => "no_open_account",
            AppError::Config(_) => "config_error",
            AppError::Report(_) => "report_error",
        }
    }
}
