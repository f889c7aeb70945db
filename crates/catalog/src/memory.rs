//! In-memory catalog and account store.
//!
//! Mirrors the uniqueness rules of the SQL schema (category name, author
//! name, book ISBN, account username, one member profile per account) so the
//! maintenance procedures can run without a database.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CatalogError;
use crate::models::{
    Account, Author, Book, Category, MemberProfile, NewAccount, NewAuthor, NewBook, NewCategory,
    NewMemberProfile,
};
use crate::repository::{AccountRepository, CatalogRepository};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    authors: Vec<Author>,
    books: Vec<Book>,
    book_authors: Vec<(Uuid, Uuid)>,
    accounts: Vec<Account>,
    member_profiles: Vec<MemberProfile>,
}

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: Mutex<Tables>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.tables().categories.clone()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.tables().authors.clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.tables().books.clone()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.tables().accounts.clone()
    }

    pub fn member_profiles(&self) -> Vec<MemberProfile> {
        self.tables().member_profiles.clone()
    }
}

fn duplicate(kind: &str, key: &str) -> CatalogError {
    CatalogError::InvalidInput(format!("{kind} '{key}' already exists"))
}

#[async_trait]
impl CatalogRepository for MemoryCatalog {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError> {
        Ok(self
            .tables()
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, CatalogError> {
        let mut tables = self.tables();
        if tables.categories.iter().any(|c| c.name == category.name) {
            return Err(duplicate("Category", &category.name));
        }
        let category = category.into_category();
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, CatalogError> {
        Ok(self
            .tables()
            .authors
            .iter()
            .find(|a| a.name == name)
            .cloned())
    }

    async fn create_author(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        let mut tables = self.tables();
        if tables.authors.iter().any(|a| a.name == author.name) {
            return Err(duplicate("Author", &author.name));
        }
        let author = author.into_author();
        tables.authors.push(author.clone());
        Ok(author)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogError> {
        Ok(self.tables().books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, CatalogError> {
        let mut tables = self.tables();
        if tables.books.iter().any(|b| b.isbn == book.isbn) {
            return Err(duplicate("Book", &book.isbn));
        }
        let book = book.into_book();
        tables.books.push(book.clone());
        Ok(book)
    }

    async fn add_book_author(&self, book_id: Uuid, author_id: Uuid) -> Result<(), CatalogError> {
        let mut tables = self.tables();
        if !tables.books.iter().any(|b| b.id == book_id)
            || !tables.authors.iter().any(|a| a.id == author_id)
        {
            return Err(CatalogError::NotFound);
        }
        if !tables.book_authors.contains(&(book_id, author_id)) {
            tables.book_authors.push((book_id, author_id));
        }
        Ok(())
    }

    async fn book_authors(&self, book_id: Uuid) -> Result<Vec<Author>, CatalogError> {
        let tables = self.tables();
        let mut authors: Vec<Author> = tables
            .book_authors
            .iter()
            .filter(|(b, _)| *b == book_id)
            .filter_map(|(_, a)| tables.authors.iter().find(|author| author.id == *a))
            .cloned()
            .collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(authors)
    }

    async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books())
    }

    async fn set_book_cover(
        &self,
        book_id: Uuid,
        cover_image: Option<&str>,
    ) -> Result<(), CatalogError> {
        let mut tables = self.tables();
        let book = tables
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(CatalogError::NotFound)?;
        book.cover_image = cover_image.map(str::to_string);
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MemoryCatalog {
    async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, CatalogError> {
        Ok(self
            .tables()
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, CatalogError> {
        let mut tables = self.tables();
        if tables.accounts.iter().any(|a| a.username == account.username) {
            return Err(duplicate("Account", &account.username));
        }
        let account = account.into_account();
        tables.accounts.push(account.clone());
        Ok(account)
    }

    async fn find_member_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<MemberProfile>, CatalogError> {
        Ok(self
            .tables()
            .member_profiles
            .iter()
            .find(|p| p.account_id == account_id)
            .cloned())
    }

    async fn create_member_profile(
        &self,
        profile: NewMemberProfile,
    ) -> Result<MemberProfile, CatalogError> {
        let mut tables = self.tables();
        if !tables.accounts.iter().any(|a| a.id == profile.account_id) {
            return Err(CatalogError::NotFound);
        }
        if tables
            .member_profiles
            .iter()
            .any(|p| p.account_id == profile.account_id)
        {
            return Err(duplicate("Member profile", &profile.account_id.to_string()));
        }
        let profile = profile.into_profile();
        tables.member_profiles.push(profile.clone());
        Ok(profile)
    }
}
