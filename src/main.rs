use stackboard::config::{AppConfig, ConfigService};
use stackboard::lifecycle::Application;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_service(&ConfigService::new()?)?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("Invalid RUST_LOG {:?} ({}), using \"info\"", config.log_filter, e);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        worker_threads = config.worker_threads,
        "Starting stackboard {}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let app = Application::builder().config(config).build().await?;
        app.run().await?;
        tracing::info!("Server stopped");
        Ok::<(), anyhow::Error>(())
    })
}
