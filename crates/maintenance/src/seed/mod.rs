//! Idempotent demo-data seeding.

pub mod accounts;
pub mod books;
pub mod classics;

use catalog::CatalogError;
use thiserror::Error;

pub use accounts::{AccountSeedReport, AccountSeeder};
pub use books::{CatalogSeedReport, CatalogSeeder};
pub use classics::CLASSIC_WORKS;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
