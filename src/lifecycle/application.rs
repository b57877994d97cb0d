//! Application Bootstrap
//!
//! Connects the store, assembles the router and runs the HTTP server until a
//! shutdown signal arrives.

use super::{LifecycleError, Result, shutdown_signal};
use crate::app_module::AppModule;
use crate::config::AppConfig;
use crate::infrastructure::database::connect_database;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::future::Future;

/// A bootstrapped application, ready to serve.
///
/// # Example
///
/// ```rust,ignore
/// let app = Application::builder()
///     .config(AppConfig::from_service(&ConfigService::new()?)?)
///     .build()
///     .await?;
///
/// app.run().await?;
/// ```
pub struct Application {
    config: AppConfig,
    db: DatabaseConnection,
    router: Router,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until Ctrl+C or SIGTERM, then shut down.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `signal` completes, let in-flight requests finish, then
    /// close the connection pool.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(self.config.bind_address).await?;
        tracing::info!("Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(async move {
                signal.await;
                tracing::info!("Initiating graceful shutdown...");
            })
            .await?;

        self.shutdown().await
    }

    /// Close the connection pool.
    pub async fn shutdown(self) -> Result<()> {
        tracing::info!("Closing database connections...");
        self.db.close().await?;
        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

/// Builder for Application
#[derive(Default)]
pub struct ApplicationBuilder {
    config: Option<AppConfig>,
    db: Option<DatabaseConnection>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an already connected pool instead of `config.database_url`.
    pub fn database(mut self, db: DatabaseConnection) -> Self {
        self.db = Some(db);
        self
    }

    pub async fn build(self) -> Result<Application> {
        let config = self
            .config
            .ok_or_else(|| LifecycleError::init_failed("no configuration supplied"))?;

        let db = match self.db {
            Some(db) => db,
            None => connect_database(&config.database_url).await?,
        };

        match &config.static_dir {
            Some(dir) if !dir.join("index.html").is_file() => {
                tracing::warn!("No index.html in static directory {}", dir.display());
            }
            Some(dir) => tracing::info!("Serving SPA from {}", dir.display()),
            None => tracing::info!("Static folder not configured"),
        }

        let router = AppModule::router(db.clone(), config.static_dir.clone());

        Ok(Application { config, db, router })
    }
}
