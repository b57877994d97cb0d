use dashmap::DashMap;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const STATIC_DIR: &str = "STATIC_DIR";
pub const RUST_LOG: &str = "RUST_LOG";
pub const WORKER_THREADS: &str = "WORKER_THREADS";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite://stackboard.db?mode=rwc";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("Failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Key/value view over the process environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Snapshot the current environment, after merging any `.env` file.
    ///
    /// A missing `.env` is fine; one that exists but cannot be read or parsed
    /// is an error.
    pub fn new() -> Result<Self, ConfigError> {
        env_file_loaded(dotenvy::dotenv())?;

        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        Ok(service)
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let service = Self::default();
        for (key, value) in pairs {
            service.set(key, value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

fn env_file_loaded<T>(result: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Typed settings the server is started with.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub database_url: String,
    /// `None` when no SPA directory is configured.
    pub static_dir: Option<PathBuf>,
    pub log_filter: String,
    pub worker_threads: usize,
}

impl AppConfig {
    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        let bind_address = config
            .get(BIND_ADDRESS)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDRESS,
                message: format!("{bind_address:?}: {e}"),
            })?;

        let static_dir = match config.get(STATIC_DIR) {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from(DEFAULT_STATIC_DIR)),
        };

        let worker_threads = match config.get(WORKER_THREADS) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: WORKER_THREADS,
                        message: "must be at least 1".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: WORKER_THREADS,
                        message: format!("{raw:?}: {e}"),
                    });
                }
            },
            None => num_cpus::get(),
        };

        Ok(Self {
            bind_address,
            database_url: config
                .get(DATABASE_URL)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            static_dir,
            log_filter: config
                .get(RUST_LOG)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            worker_threads,
        })
    }
}
