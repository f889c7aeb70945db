//! Cover backfill over every existing catalog entry.
//!
//! Each entry is handled independently: resolve a cover URL, download it,
//! normalize the image, replace the stored cover. Any failure on the way turns
//! the entry into a skip and the run moves on. A fixed pause follows every
//! entry to stay inside third-party rate limits.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use catalog::{CatalogError, CatalogRepository, cover_storage::CoverStorage, models::Book};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::MaintenanceConfig;
use crate::covers::query::{cover_filename, prepare_download_url};
use crate::covers::{
    CoverOrigin, CoverResolver, CuratedCovers, EncodedCover, GoogleBooksSource,
    OpenLibrarySource, normalize_cover,
};
use crate::http::HttpFetch;

#[derive(Debug, Error)]
pub enum BackfillError {
    #[error("Could not list catalog entries: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("no cover found")]
    NoCoverFound,
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("storage failed: {0}")]
    StorageFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Updated {
        cover_path: String,
        origin: CoverOrigin,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub updated: usize,
    pub skipped: usize,
    pub processed: usize,
}

/// Curated table first, then the primary and fallback metadata APIs.
pub fn standard_resolver(config: &MaintenanceConfig, fetcher: Arc<dyn HttpFetch>) -> CoverResolver {
    CoverResolver::new(CuratedCovers::builtin())
        .with_source(GoogleBooksSource::new(
            fetcher.clone(),
            &config.google_books_endpoint,
        ))
        .with_source(OpenLibrarySource::new(
            fetcher,
            &config.open_library_endpoint,
            &config.open_library_covers_base,
        ))
}

pub struct CoverBackfill {
    repo: Arc<dyn CatalogRepository>,
    fetcher: Arc<dyn HttpFetch>,
    storage: CoverStorage,
    resolver: CoverResolver,
    delay: Duration,
}

impl CoverBackfill {
    pub fn new(
        repo: Arc<dyn CatalogRepository>,
        fetcher: Arc<dyn HttpFetch>,
        storage: CoverStorage,
        resolver: CoverResolver,
    ) -> Self {
        Self {
            repo,
            fetcher,
            storage,
            resolver,
            delay: Duration::from_secs(1),
        }
    }

    /// Sets the pause that follows each entry.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Processes every catalog entry once. Only a failure to list the
    /// entries is returned as an error.
    pub async fn run(&self) -> Result<BackfillReport, BackfillError> {
        let books = self.repo.list_books().await?;
        info!("{} books to process", books.len());

        let mut report = BackfillReport::default();
        for book in &books {
            info!("Processing: {}. {}", book.id, book.title);

            match self.process(book).await {
                EntryOutcome::Updated { cover_path, origin } => {
                    report.updated += 1;
                    info!("  Cover updated: {} -> {cover_path} ({origin:?})", book.title);
                }
                EntryOutcome::Skipped(reason) => {
                    report.skipped += 1;
                    info!("  Skipped {}: {reason}", book.title);
                }
            }
            report.processed += 1;

            tokio::time::sleep(self.delay).await;
        }

        info!(
            "{} covers updated, {} books skipped",
            report.updated, report.skipped
        );
        info!("Done. {} books processed", report.processed);
        Ok(report)
    }

    /// Resolves, downloads and stores the cover for one entry.
    pub async fn process(&self, book: &Book) -> EntryOutcome {
        let Some(resolved) = self.resolver.resolve(&book.title).await else {
            return EntryOutcome::Skipped(SkipReason::NoCoverFound);
        };

        let raw = match self.download(&resolved.url).await {
            Ok(raw) => raw,
            Err(reason) => return EntryOutcome::Skipped(reason),
        };

        let cover = match normalize_cover(&raw) {
            Ok(cover) => cover,
            Err(e) => return EntryOutcome::Skipped(SkipReason::InvalidImage(e.to_string())),
        };

        match self.replace_cover(book, cover).await {
            Ok(cover_path) => EntryOutcome::Updated {
                cover_path,
                origin: resolved.origin,
            },
            Err(e) => EntryOutcome::Skipped(SkipReason::StorageFailed(e.to_string())),
        }
    }

    async fn download(&self, url: &str) -> Result<Bytes, SkipReason> {
        let url = prepare_download_url(url);
        info!("  Downloading: {url}");

        let response = self
            .fetcher
            .get(&url)
            .await
            .map_err(|e| SkipReason::DownloadFailed(e.to_string()))?;

        if !response.is_ok() {
            return Err(SkipReason::DownloadFailed(format!(
                "HTTP status {}",
                response.status
            )));
        }
        Ok(response.body)
    }

    /// Deletes the previous cover (best effort) and stores the new one.
    async fn replace_cover(&self, book: &Book, cover: EncodedCover) -> Result<String, CatalogError> {
        if let Some(old) = &book.cover_image {
            match self.storage.delete_cover(old).await {
                Ok(()) => info!("  Old cover deleted: {old}"),
                Err(e) => warn!("  Could not delete old cover {old} (continuing): {e}"),
            }
        }

        let filename = cover_filename(book, cover.format);
        let cover_path = self.storage.store_cover(&filename, cover.bytes).await?;
        self.repo.set_book_cover(book.id, Some(&cover_path)).await?;
        info!("  New cover saved: {filename}");

        Ok(cover_path)
    }
}
