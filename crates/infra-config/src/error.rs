// Settings Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}
