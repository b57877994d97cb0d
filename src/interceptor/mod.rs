use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;

pub use layer::{InterceptorMiddleware, SharedInterceptorLayer};
pub use logging::{LoggingInterceptor, REQUEST_ID_HEADER};

/// standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// Represents the next handler in the chain
pub struct Next {
    run: Box<dyn FnOnce(Request<Body>) -> BoxFuture + Send>,
}

impl Next {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> BoxFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// Interceptors can inspect/modify the request before it reaches the handler,
/// and inspect/modify the response after the handler returns.
///
/// # Example
/// ```rust,ignore
/// struct TimingInterceptor;
///
/// #[async_trait]
/// impl Interceptor for TimingInterceptor {
///     async fn intercept(&self, req: Request<Body>, next: Next) -> InterceptorResult {
///         let start = Instant::now();
///         let res = next.run(req).await?;
///         tracing::info!("took {:?}", start.elapsed());
///         Ok(res)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
