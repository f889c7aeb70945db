//! One-shot maintenance procedures for the library catalog.
//!
//! - [`seed::CatalogSeeder`] inserts a fixed list of classic works.
//! - [`seed::AccountSeeder`] ensures the demo admin and member accounts exist.
//! - [`backfill::CoverBackfill`] attaches cover images to every catalog entry,
//!   resolving URLs through a curated table and two metadata APIs.

pub mod backfill;
pub mod config;
pub mod covers;
pub mod http;
pub mod seed;

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
