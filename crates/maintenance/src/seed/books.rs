//! Seeding of the fixed classics list into the catalog.

use std::sync::Arc;

use catalog::{
    CatalogRepository,
    cover_storage::CoverStorage,
    models::{Author, Book, Category, NewAuthor, NewBook, NewCategory},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::SeedError;
use super::classics::{
    CLASSICS_CATEGORY, CLASSICS_CATEGORY_DESCRIPTION, ClassicAuthor, ClassicWork, SEED_COPIES,
};
use crate::covers::query::seed_cover_filename;
use crate::http::HttpFetch;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSeedReport {
    pub books_created: usize,
    pub books_existing: usize,
    pub authors_created: usize,
    pub covers_attached: usize,
    pub cover_failures: usize,
}

/// Inserts works, their authors and the shared category. Descriptive fields
/// are only written when a book is first created; a cover is only fetched
/// for a book created by this run.
pub struct CatalogSeeder {
    repo: Arc<dyn CatalogRepository>,
    fetcher: Arc<dyn HttpFetch>,
    storage: CoverStorage,
}

impl CatalogSeeder {
    pub fn new(
        repo: Arc<dyn CatalogRepository>,
        fetcher: Arc<dyn HttpFetch>,
        storage: CoverStorage,
    ) -> Self {
        Self {
            repo,
            fetcher,
            storage,
        }
    }

    pub async fn seed(&self, works: &[ClassicWork]) -> Result<CatalogSeedReport, SeedError> {
        info!("Seeding {} classic works...", works.len());

        let mut report = CatalogSeedReport::default();
        let category = self.find_or_create_category().await?;

        for work in works {
            let (author, author_created) = self.find_or_create_author(&work.author).await?;
            if author_created {
                report.authors_created += 1;
            }

            let (book, created) = self.find_or_create_book(work, category.id).await?;
            self.repo.add_book_author(book.id, author.id).await?;

            if created {
                report.books_created += 1;
                if let Some(url) = work.cover_image_url {
                    if self.attach_cover(&book, url).await {
                        report.covers_attached += 1;
                    } else {
                        report.cover_failures += 1;
                    }
                }
                info!("Book created: {}", book.title);
            } else {
                report.books_existing += 1;
                info!("Book already present: {}", book.title);
            }
        }

        info!(
            "Seeded classics: {} created, {} already present, {} authors created, {} covers attached",
            report.books_created, report.books_existing, report.authors_created, report.covers_attached
        );
        Ok(report)
    }

    async fn find_or_create_category(&self) -> Result<Category, SeedError> {
        if let Some(category) = self.repo.find_category_by_name(CLASSICS_CATEGORY).await? {
            return Ok(category);
        }

        let category = self
            .repo
            .create_category(NewCategory {
                name: CLASSICS_CATEGORY.to_string(),
                description: CLASSICS_CATEGORY_DESCRIPTION.to_string(),
            })
            .await?;
        info!("Category created: {}", category.name);
        Ok(category)
    }

    async fn find_or_create_author(
        &self,
        author: &ClassicAuthor,
    ) -> Result<(Author, bool), SeedError> {
        if let Some(existing) = self.repo.find_author_by_name(author.name).await? {
            return Ok((existing, false));
        }

        let created = self
            .repo
            .create_author(NewAuthor {
                name: author.name.to_string(),
                biography: author.biography.to_string(),
                birth_date: author.birth_date,
            })
            .await?;
        Ok((created, true))
    }

    async fn find_or_create_book(
        &self,
        work: &ClassicWork,
        category_id: Uuid,
    ) -> Result<(Book, bool), SeedError> {
        if let Some(existing) = self.repo.find_book_by_isbn(work.isbn).await? {
            return Ok((existing, false));
        }

        let created = self
            .repo
            .create_book(NewBook {
                title: work.title.to_string(),
                isbn: work.isbn.to_string(),
                publication_date: work.publication_date,
                description: work.description.to_string(),
                page_count: work.page_count,
                language: work.language.to_string(),
                publisher: work.publisher.to_string(),
                category_id: Some(category_id),
                total_copies: SEED_COPIES,
                available_copies: SEED_COPIES,
            })
            .await?;
        Ok((created, true))
    }

    /// Downloads `url` and stores the body unchanged as the book's cover.
    /// Failures are logged and reported as `false`.
    async fn attach_cover(&self, book: &Book, url: &str) -> bool {
        let response = match self.fetcher.get(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error downloading cover for {}: {e}", book.title);
                return false;
            }
        };

        if !response.is_ok() {
            warn!(
                "Could not download cover for {} (HTTP {})",
                book.title, response.status
            );
            return false;
        }

        let filename = seed_cover_filename(&book.isbn);
        let stored = match self.storage.store_cover(&filename, response.body).await {
            Ok(path) => path,
            Err(e) => {
                warn!("Error storing cover for {}: {e}", book.title);
                return false;
            }
        };

        if let Err(e) = self.repo.set_book_cover(book.id, Some(&stored)).await {
            warn!("Error saving cover reference for {}: {e}", book.title);
            return false;
        }

        info!("Cover attached: {}", book.title);
        true
    }
}
