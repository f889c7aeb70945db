//! Repository interfaces for the catalog and account stores.
//!
//! Each lookup is keyed by the record's unique field (category name, author
//! name, book ISBN, account username). Seeding code composes these into
//! find-or-create steps; nothing here holds ambient session state.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::CatalogError,
    models::{
        Account, Author, Book, Category, MemberProfile, NewAccount, NewAuthor, NewBook,
        NewCategory, NewMemberProfile,
    },
};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError>;

    async fn create_category(&self, category: NewCategory) -> Result<Category, CatalogError>;

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, CatalogError>;

    async fn create_author(&self, author: NewAuthor) -> Result<Author, CatalogError>;

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogError>;

    async fn create_book(&self, book: NewBook) -> Result<Book, CatalogError>;

    /// Links an author to a book. Linking an existing pair is a no-op.
    async fn add_book_author(&self, book_id: Uuid, author_id: Uuid) -> Result<(), CatalogError>;

    /// Authors linked to a book, by name.
    async fn book_authors(&self, book_id: Uuid) -> Result<Vec<Author>, CatalogError>;

    /// All books in creation order.
    async fn list_books(&self) -> Result<Vec<Book>, CatalogError>;

    /// Replaces the cover reference of a book.
    async fn set_book_cover(
        &self,
        book_id: Uuid,
        cover_image: Option<&str>,
    ) -> Result<(), CatalogError>;
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, CatalogError>;

    async fn create_account(&self, account: NewAccount) -> Result<Account, CatalogError>;

    async fn find_member_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<MemberProfile>, CatalogError>;

    async fn create_member_profile(
        &self,
        profile: NewMemberProfile,
    ) -> Result<MemberProfile, CatalogError>;
}
