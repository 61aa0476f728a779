
use access_stub::config::AppConfig;
use access_stub::util::env::load_dotenv;
use access_stub::{create_app, AppState};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    debug!("Config:\n {:#?}", config);

    let addr = config.bind_addr();
    let app = create_app(AppState::new(config));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;
    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, app).await.context("Server error")
}
