//! Error types for roleset
//!
//! The ordering and readiness core never fails; these errors only come from
//! the surfaces around it (config loading, snapshot decoding).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Decode Errors ===
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    // === Config Errors ===
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Was this caused by user input rather than the environment?
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Snapshot(_) | Error::Config(_) | Error::InvalidConfig(_)
        )
    }
}
