use crate::error::AppError;
use crate::interceptor::{BoxFuture, Interceptor, Next};
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer running a chain of interceptors around the wrapped service.
///
/// Interceptors run in the order given: the first one sees the request first
/// and the response last. An interceptor error is answered with a 500.
#[derive(Clone)]
pub struct SharedInterceptorLayer {
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
}

impl SharedInterceptorLayer {
    pub fn new(interceptors: Vec<Box<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }
}

impl<S> Layer<S> for SharedInterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Box<dyn Interceptor>>>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);
        // Take the service that was driven to readiness, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let mut chain = Next::new(move |req| -> BoxFuture {
            let future = inner.call(req);
            Box::pin(async move {
                match future.await {
                    Ok(response) => Ok(response),
                    Err(never) => match never {},
                }
            })
        });

        // Wrap from the innermost outwards so interceptors[0] runs first.
        for i in (0..interceptors.len()).rev() {
            let interceptors = Arc::clone(&interceptors);
            let next = chain;
            chain = Next::new(move |req| -> BoxFuture {
                Box::pin(async move { interceptors[i].intercept(req, next).await })
            });
        }

        Box::pin(async move {
            Ok(match chain.run(request).await {
                Ok(response) => response,
                Err(e) => AppError::Internal(e.to_string()).into_response(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::{InterceptorResult, LoggingInterceptor, REQUEST_ID_HEADER};
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, routing::get};
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct Recording {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Interceptor for Recording {
        async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
            self.log.lock().unwrap().push(format!("before {}", self.name));
            let response = next.run(request).await?;
            self.log.lock().unwrap().push(format!("after {}", self.name));
            Ok(response)
        }
    }

    struct Rejecting;

    #[async_trait]
    impl Interceptor for Rejecting {
        async fn intercept(&self, _request: Request<Body>, _next: Next) -> InterceptorResult {
            Err("interceptor refused".into())
        }
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_interceptors_wrap_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let layer = SharedInterceptorLayer::new(vec![
            Box::new(Recording {
                name: "outer",
                log: Arc::clone(&log),
            }),
            Box::new(Recording {
                name: "inner",
                log: Arc::clone(&log),
            }),
        ]);
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);

        let response = app.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["before outer", "before inner", "after inner", "after outer"]
        );
    }

    #[tokio::test]
    async fn test_interceptor_error_becomes_500() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(SharedInterceptorLayer::new(vec![Box::new(Rejecting)]));

        let response = app.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_logging_sets_request_id() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(SharedInterceptorLayer::new(vec![Box::new(LoggingInterceptor)]));

        let response = app.oneshot(request()).await.unwrap();
        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
