use crate::exception::http::HttpException;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use strum_macros::IntoStaticStr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error, IntoStaticStr)]
pub enum AppError {
    #[error("{0}")]
    #[strum(serialize = "validation_error")]
    Validation(String),

    #[error("User not found")]
    #[strum(serialize = "not_found")]
    NotFound,

    #[error("{0}")]
    #[strum(serialize = "payload_too_large")]
    PayloadTooLarge(String),

    #[error("{0}")]
    #[strum(serialize = "write_failed")]
    WriteFailed(String),

    #[error("Database error: {0}")]
    #[strum(serialize = "database_error")]
    Database(String),

    #[error("Internal error: {0}")]
    #[strum(serialize = "internal_error")]
    Internal(String),
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::WriteFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable snake_case identifier reported in the `error` field of the body.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "{}", self);
        } else {
            tracing::warn!(kind = self.kind(), "{}", self);
        }
        HttpException::new(status, self.kind(), self.to_string()).into_response()
    }
}
