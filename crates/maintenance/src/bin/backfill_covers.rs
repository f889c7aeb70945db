//! Fetches and stores a cover image for every catalog entry.
//!
//! Run with:
//! ```
//! cargo run -p maintenance --bin backfill_covers
//! ```

use std::sync::Arc;

use catalog::{cover_storage::CoverStorage, database::Database};
use maintenance::{
    backfill::{CoverBackfill, standard_resolver},
    config::MaintenanceConfig,
    http::{HttpFetch, ReqwestFetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    maintenance::init_tracing();

    let config = MaintenanceConfig::from_env();
    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.migrate().await?;
    tracing::info!("Connected to database");

    let storage = CoverStorage::new_local(&config.media_root)?;
    let fetcher: Arc<dyn HttpFetch> = Arc::new(ReqwestFetcher::new(config.http_timeout())?);
    let resolver = standard_resolver(&config, fetcher.clone());

    CoverBackfill::new(Arc::new(db), fetcher, storage, resolver)
        .with_delay(config.backfill_delay())
        .run()
        .await?;

    Ok(())
}
