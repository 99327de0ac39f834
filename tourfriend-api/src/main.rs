use std::net::SocketAddr;

use anyhow::Context;
use tourfriend_api::{app, AppState};
use tourfriend_core::seeding;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tourfriend_api=debug,tourfriend_core=info,tourfriend_store=debug,tower_http=debug,axum::rejection=trace"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = tourfriend_store::Config::load().context("Failed to load config")?;
    tracing::info!("Starting TourFriend API on port {}", config.server.port);

    let stores = tourfriend_store::connect(&config.database)
        .await
        .context("Failed to open listing store")?;

    // Seeding errors are logged inside and never stop startup.
    let report = seeding::initialize(stores.destinations.as_ref(), stores.packages.as_ref()).await;
    tracing::debug!("Seed report: {:?}", report);

    let state = AppState::new(stores, &config.cors);
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
