#![recursion_limit = "256"]

mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = config::SiteConfig::from_env()?;
    if !config.site_dir.is_dir() {
        tracing::warn!(site_dir = %config.site_dir.display(), "site directory missing; static sections will 404");
    }

    // Non-fatal: without Leptos options the static sections are still served.
    let app = match routes::app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving static sections only");
            routes::static_site(&config.site_dir)
        }
    };
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
