use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;

/// Raw body of a request that declared a JSON content type.
///
/// Parsing is deferred to [`JsonBody::value`] so handlers can check other
/// preconditions (such as the target existing) before looking at the payload.
///
/// # Example
/// ```rust,ignore
/// async fn update(Path(id): Path<String>, body: JsonBody) -> Result<Json<User>> {
///     let user = service.get(id).await?;
///     let payload = body.value()?;
///     // ...
/// }
/// ```
pub struct JsonBody(Bytes);

impl JsonBody {
    /// Parse the body. An empty body reads as `null`.
    pub fn value(&self) -> Result<Value, AppError> {
        if self.0.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.0)
            .map_err(|e| AppError::validation(format!("Malformed JSON body: {e}")))
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"))
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(request.headers()) {
            return Err(AppError::validation("Request must be JSON"));
        }

        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(e.body_text())
                } else {
                    AppError::validation(e.body_text())
                }
            })?;
        Ok(JsonBody(bytes))
    }
}
