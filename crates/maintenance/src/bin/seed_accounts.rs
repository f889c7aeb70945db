//! Ensures the demo admin and member accounts exist.
//!
//! Run with:
//! ```
//! cargo run -p maintenance --bin seed_accounts
//! ```

use std::sync::Arc;

use catalog::database::Database;
use maintenance::{config::MaintenanceConfig, seed::AccountSeeder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    maintenance::init_tracing();

    let config = MaintenanceConfig::from_env();
    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.migrate().await?;
    tracing::info!("Connected to database");

    let report = AccountSeeder::new(Arc::new(db)).seed().await?;

    tracing::info!(
        "Accounts seeded (admin created: {}, member created: {})",
        report.admin_created,
        report.member_created
    );

    Ok(())
}
