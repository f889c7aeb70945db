//! Seeds the world classics into the catalog.
//!
//! Run with:
//! ```
//! cargo run -p maintenance --bin seed_catalog
//! ```

use std::sync::Arc;

use catalog::{cover_storage::CoverStorage, database::Database};
use maintenance::{
    config::MaintenanceConfig,
    http::ReqwestFetcher,
    seed::{CLASSIC_WORKS, CatalogSeeder},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    maintenance::init_tracing();

    let config = MaintenanceConfig::from_env();
    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.migrate().await?;
    tracing::info!("Connected to database");

    let storage = CoverStorage::new_local(&config.media_root)?;
    let fetcher = ReqwestFetcher::new(config.http_timeout())?;

    let report = CatalogSeeder::new(Arc::new(db), Arc::new(fetcher), storage)
        .seed(CLASSIC_WORKS)
        .await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Books created: {}", report.books_created);
    tracing::info!("  Books already present: {}", report.books_existing);
    tracing::info!("  Authors created: {}", report.authors_created);
    tracing::info!("  Covers attached: {}", report.covers_attached);
    tracing::info!("  Cover failures: {}", report.cover_failures);

    Ok(())
}
