use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body sent for every failed API request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpException {
    #[serde(skip)]
    status: StatusCode,
    status_code: u16,
    error: &'static str,
    message: String,
    timestamp: String,
}

impl HttpException {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            status_code: status.as_u16(),
            error,
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
