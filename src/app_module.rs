use crate::interceptor::{LoggingInterceptor, SharedInterceptorLayer};
use crate::modules::frontend::FrontendController;
use crate::modules::info::InfoController;
use crate::modules::user::{SeaOrmUserStore, UserController, UserService};
use crate::transactional::TransactionManager;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;

/// Root application module
///
/// Wires the store into the user service and mounts every controller:
/// the API under `/api`, the SPA as the fallback for everything else.
pub struct AppModule;

impl AppModule {
    pub const API_PREFIX: &'static str = "/api";

    pub fn router(db: DatabaseConnection, static_dir: Option<PathBuf>) -> Router {
        let store = Arc::new(SeaOrmUserStore::new(TransactionManager::new(db)));
        let users = Arc::new(UserService::new(store));

        let api = Router::new()
            .merge(UserController::router(users))
            .merge(InfoController::router());

        Router::new()
            .nest(Self::API_PREFIX, api)
            .fallback_service(FrontendController::service(static_dir))
            .layer(SharedInterceptorLayer::new(vec![Box::new(LoggingInterceptor)]))
    }
}
