//! Lifecycle-specific error types

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while starting or stopping the application
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifecycleError {
    /// Create an initialization failure error
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
