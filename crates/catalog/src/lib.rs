//! Library catalog domain.
//!
//! Books, authors, categories and accounts, the repository interfaces the
//! maintenance procedures are written against, a PostgreSQL implementation
//! ([`database::Database`]), an in-memory one ([`memory::MemoryCatalog`]),
//! and file storage for cover images ([`cover_storage::CoverStorage`]).

pub mod auth;
pub mod cover_storage;
pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod repository;

pub use errors::CatalogError;
pub use repository::{AccountRepository, CatalogRepository};
