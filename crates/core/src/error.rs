// Central Error Type for the Application

use crate::domain::SiteId;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Site not found: {0}")]
    SiteNotFound(SiteId),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
