//! # stackboard
//!
//! REST backend for the stackboard dashboard.
//!
//! - `/api/users`: CRUD over a single `users` table (SeaORM, SQLite)
//! - `/api/status`, `/api/infrastructure`: fixed informational documents
//! - everything else: the bundled single-page application
//!
//! ## Layout
//!
//! - [`modules`]: one directory per feature (controller, service, repository)
//! - [`transactional`]: transaction handling for store writes
//! - [`pipe`]: request validation
//! - [`interceptor`]: request/response middleware (logging)
//! - [`lifecycle`]: bootstrap and graceful shutdown
//!
//! ```rust,no_run
//! use stackboard::config::{AppConfig, ConfigService};
//! use stackboard::lifecycle::Application;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = AppConfig::from_service(&ConfigService::new()?)?;
//! Application::builder().config(config).build().await?.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_module;
pub mod common;
pub mod config;
pub mod error;
pub mod exception;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod modules;
pub mod pipe;
pub mod transactional;

pub use app_module::AppModule;
pub use error::{AppError, Result};
