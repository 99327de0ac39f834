use tourfriend_client::hero::WordRotator;
use tourfriend_client::render::page;
use tourfriend_client::{DestinationsSection, ListingClient, PackagesSection, QueryConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourfriend_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let hero = WordRotator::new();
    let config = QueryConfig::from_env();
    tracing::info!("Using API at {}", config.base_url);
    let client = ListingClient::new(config.clone())?;

    let mut destinations = DestinationsSection::new(config.base_url.clone());
    let mut packages = PackagesSection::new(config.base_url.clone());

    // Independent requests; neither waits on the other.
    tokio::join!(destinations.load(&client), packages.load(&client));

    print!("{}", page(&hero, &destinations, &packages));

    Ok(())
}
