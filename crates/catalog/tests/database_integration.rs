//! Integration tests for the PostgreSQL repositories.
//!
//! To run these tests, you need a PostgreSQL database and the `DATABASE_URL`
//! environment variable set. Migrations are applied by the tests.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p catalog database`
//!
//! Every test uses its own unique names and removes its rows afterwards, so
//! the suite can run against a development database.

use std::env;

use catalog::{
    AccountRepository, CatalogError, CatalogRepository,
    auth::AccountRegistration,
    database::Database,
    models::{AccountRole, NewAuthor, NewBook, NewCategory, NewMemberProfile},
};
use time::macros::date;
use uuid::Uuid;

/// Connects and migrates, skipping tests if DATABASE_URL is not set.
async fn get_test_db() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let db = match Database::connect(&database_url, 1).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };
    db.migrate().await.expect("Failed to apply migrations");
    Some(db)
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[tokio::test]
async fn test_book_lifecycle() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let category = db
        .create_category(NewCategory {
            name: unique("category"),
            description: "Integration test category".to_string(),
        })
        .await
        .expect("Failed to create category");
    assert_eq!(
        db.find_category_by_name(&category.name)
            .await
            .unwrap()
            .map(|c| c.id),
        Some(category.id)
    );

    let author = db
        .create_author(NewAuthor {
            name: unique("author"),
            biography: String::new(),
            birth_date: Some(date!(1821 - 11 - 11)),
        })
        .await
        .expect("Failed to create author");

    let isbn = Uuid::new_v4().simple().to_string()[..13].to_string();
    let book = db
        .create_book(NewBook {
            title: "Integration Test Book".to_string(),
            isbn: isbn.clone(),
            publication_date: date!(1866 - 01 - 01),
            description: "A book created by the integration suite".to_string(),
            page_count: 120,
            language: "English".to_string(),
            publisher: "Test Press".to_string(),
            category_id: Some(category.id),
            total_copies: 3,
            available_copies: 3,
        })
        .await
        .expect("Failed to create book");
    assert_eq!(book.cover_image, None);

    // A second book with the same ISBN is rejected by the schema.
    let duplicate = db
        .create_book(NewBook {
            title: "Duplicate".to_string(),
            isbn: isbn.clone(),
            publication_date: date!(1866 - 01 - 01),
            description: String::new(),
            page_count: 1,
            language: "English".to_string(),
            publisher: "Test Press".to_string(),
            category_id: None,
            total_copies: 1,
            available_copies: 1,
        })
        .await;
    assert!(matches!(duplicate, Err(CatalogError::Database(_))));

    db.add_book_author(book.id, author.id).await.unwrap();
    db.add_book_author(book.id, author.id).await.unwrap();
    let authors = db.book_authors(book.id).await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].id, author.id);

    db.set_book_cover(book.id, Some("covers/integration.jpg"))
        .await
        .unwrap();
    let found = db.find_book_by_isbn(&isbn).await.unwrap().unwrap();
    assert_eq!(found.cover_image.as_deref(), Some("covers/integration.jpg"));
    assert!(db.list_books().await.unwrap().iter().any(|b| b.id == book.id));

    let missing = db.set_book_cover(Uuid::new_v4(), None).await;
    assert!(matches!(missing, Err(CatalogError::NotFound)));

    // Cleanup
    let pool = db.pool();
    let _ = sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
        .bind(book.id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(book.id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM authors WHERE id = $1")
        .bind(author.id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category.id)
        .execute(pool)
        .await;
}

#[tokio::test]
async fn test_account_and_member_profile() {
    let Some(db) = get_test_db().await else {
        return;
    };

    let username = unique("member");
    let new_account = AccountRegistration {
        username: username.clone(),
        email: format!("{username}@example.com"),
        password: "Integration1!".to_string(),
        first_name: "Test".to_string(),
        last_name: "Member".to_string(),
        role: AccountRole::Member,
    }
    .into_new_account()
    .unwrap();

    let account = db.create_account(new_account).await.unwrap();
    let found = db
        .find_account_by_username(&username)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, account.id);
    assert_eq!(found.role, AccountRole::Member);
    assert!(db.find_member_profile(account.id).await.unwrap().is_none());

    let profile = db
        .create_member_profile(NewMemberProfile {
            account_id: account.id,
            phone_number: "5551234567".to_string(),
            address: "Örnek Adres, İstanbul".to_string(),
            membership_date: date!(2024 - 01 - 15),
        })
        .await
        .unwrap();
    assert_eq!(
        db.find_member_profile(account.id)
            .await
            .unwrap()
            .map(|p| p.id),
        Some(profile.id)
    );

    // Cleanup
    let pool = db.pool();
    let _ = sqlx::query("DELETE FROM member_profiles WHERE account_id = $1")
        .bind(account.id)
        .execute(pool)
        .await;
    let _ = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(account.id)
        .execute(pool)
        .await;
}
