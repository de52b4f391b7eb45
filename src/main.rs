use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use basket_api::{
    api::{create_router, AppState},
    config::Config,
    db::{create_pool, SqliteCatalog},
    services::CatalogStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basket_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    // No degraded mode: a missing table or column stops startup here
    let store = CatalogStore::new(Arc::new(SqliteCatalog::new(pool)));
    let catalog = store.load().await.context("Failed to load catalog")?;

    let app = create_router(AppState::new(catalog, config.lift_threshold));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(
        address = %address,
        lift_threshold = config.lift_threshold,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
