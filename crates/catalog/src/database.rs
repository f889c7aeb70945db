use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;
use uuid::Uuid;

use crate::errors::CatalogError;
use crate::models::{
    Account, Author, Book, Category, MemberProfile, NewAccount, NewAuthor, NewBook, NewCategory,
    NewMemberProfile,
};
use crate::repository::{AccountRepository, CatalogRepository};

const BOOK_COLUMNS: &str = r#"
    id, title, isbn, publication_date, description, page_count, language, publisher,
    category_id, total_copies, available_copies, cover_image, created_at
"#;

const ACCOUNT_COLUMNS: &str = r#"
    id, username, email, password_hash, first_name, last_name, role, created_at
"#;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), CatalogError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Catalog migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogRepository for Database {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, CatalogError> {
        let category = sqlx::query_as(
            r#"
            SELECT id, name, description
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, CatalogError> {
        let category = category.into_category();
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .execute(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, CatalogError> {
        let author = sqlx::query_as(
            r#"
            SELECT id, name, biography, birth_date
            FROM authors
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    async fn create_author(&self, author: NewAuthor) -> Result<Author, CatalogError> {
        let author = author.into_author();
        sqlx::query(
            r#"
            INSERT INTO authors (id, name, biography, birth_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(author.id)
        .bind(&author.name)
        .bind(&author.biography)
        .bind(author.birth_date)
        .execute(&self.pool)
        .await?;

        Ok(author)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogError> {
        let book = sqlx::query_as(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE isbn = $1"
        ))
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn create_book(&self, book: NewBook) -> Result<Book, CatalogError> {
        let book = book.into_book();
        sqlx::query(
            r#"
            INSERT INTO books (
                id, title, isbn, publication_date, description, page_count,
                language, publisher, category_id, total_copies, available_copies,
                cover_image, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.publication_date)
        .bind(&book.description)
        .bind(book.page_count)
        .bind(&book.language)
        .bind(&book.publisher)
        .bind(book.category_id)
        .bind(book.total_copies)
        .bind(book.available_copies)
        .bind(&book.cover_image)
        .bind(book.created_at)
        .execute(&self.pool)
        .await?;

        Ok(book)
    }

    async fn add_book_author(&self, book_id: Uuid, author_id: Uuid) -> Result<(), CatalogError> {
        sqlx::query(
            r#"
            INSERT INTO book_authors (book_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT (book_id, author_id) DO NOTHING
            "#,
        )
        .bind(book_id)
        .bind(author_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn book_authors(&self, book_id: Uuid) -> Result<Vec<Author>, CatalogError> {
        let authors = sqlx::query_as(
            r#"
            SELECT a.id, a.name, a.biography, a.birth_date
            FROM authors a
            JOIN book_authors ba ON ba.author_id = a.id
            WHERE ba.book_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        let books = sqlx::query_as(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn set_book_cover(
        &self,
        book_id: Uuid,
        cover_image: Option<&str>,
    ) -> Result<(), CatalogError> {
        let result = sqlx::query("UPDATE books SET cover_image = $2 WHERE id = $1")
            .bind(book_id)
            .bind(cover_image)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for Database {
    async fn find_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, CatalogError> {
        let account = sqlx::query_as(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, CatalogError> {
        let account = account.into_account();
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, email, password_hash, first_name, last_name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.role)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_member_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<MemberProfile>, CatalogError> {
        let profile = sqlx::query_as(
            r#"
            SELECT id, account_id, phone_number, address, membership_date
            FROM member_profiles
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn create_member_profile(
        &self,
        profile: NewMemberProfile,
    ) -> Result<MemberProfile, CatalogError> {
        let profile = profile.into_profile();
        sqlx::query(
            r#"
            INSERT INTO member_profiles (id, account_id, phone_number, address, membership_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile.id)
        .bind(profile.account_id)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(profile.membership_date)
        .execute(&self.pool)
        .await?;

        Ok(profile)
    }
}
