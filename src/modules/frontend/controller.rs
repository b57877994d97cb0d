use super::StaticFiles;
use axum::{
    extract::State,
    http::Uri,
    response::Response,
    routing::{MethodRouter, get},
};
use std::path::PathBuf;
use std::sync::Arc;

pub struct FrontendController;

impl FrontendController {
    /// GET-only service meant for `Router::fallback_service`.
    pub fn service(static_dir: Option<PathBuf>) -> MethodRouter {
        get(serve).with_state(Arc::new(StaticFiles::new(static_dir)))
    }
}

async fn serve(State(files): State<Arc<StaticFiles>>, uri: Uri) -> Response {
    files.respond(uri.path()).await
}
