//! Request pipes: transform raw request input into validated domain values.

use crate::error::AppError;
use async_trait::async_trait;

pub mod builtins;

pub type PipeResult<T> = Result<T, PipeError>;

#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("{0}")]
    Validation(String),

    /// The input names a resource that cannot exist.
    #[error("User not found")]
    NotFound,
}

impl From<PipeError> for AppError {
    fn from(err: PipeError) -> Self {
        match err {
            PipeError::Validation(reason) => AppError::Validation(reason),
            PipeError::NotFound => AppError::NotFound,
        }
    }
}

/// The Pipe trait for transformation and validation
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}
