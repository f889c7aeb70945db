use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    pub fn into_category(self) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub biography: String,
    pub birth_date: Option<Date>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub biography: String,
    pub birth_date: Option<Date>,
}

impl NewAuthor {
    pub fn into_author(self) -> Author {
        Author {
            id: Uuid::new_v4(),
            name: self.name,
            biography: self.biography,
            birth_date: self.birth_date,
        }
    }
}

/// A catalog entry. `isbn` is the unique key; `cover_image` is the storage
/// path of the attached cover, if any.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub isbn: String,
    pub publication_date: Date,
    pub description: String,
    pub page_count: i32,
    pub language: String,
    pub publisher: String,
    pub category_id: Option<Uuid>,
    pub total_copies: i32,
    pub available_copies: i32,
    pub cover_image: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Fields applied only when a book is first created.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub publication_date: Date,
    pub description: String,
    pub page_count: i32,
    pub language: String,
    pub publisher: String,
    pub category_id: Option<Uuid>,
    pub total_copies: i32,
    pub available_copies: i32,
}

impl NewBook {
    pub fn into_book(self) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: self.title,
            isbn: self.isbn,
            publication_date: self.publication_date,
            description: self.description,
            page_count: self.page_count,
            language: self.language,
            publisher: self.publisher,
            category_id: self.category_id,
            total_copies: self.total_copies,
            available_copies: self.available_copies,
            cover_image: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Member,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AccountRole,
    pub created_at: OffsetDateTime,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AccountRole,
}

impl NewAccount {
    pub fn into_account(self) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MemberProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub phone_number: String,
    pub address: String,
    pub membership_date: Date,
}

#[derive(Debug, Clone)]
pub struct NewMemberProfile {
    pub account_id: Uuid,
    pub phone_number: String,
    pub address: String,
    pub membership_date: Date,
}

impl NewMemberProfile {
    pub fn into_profile(self) -> MemberProfile {
        MemberProfile {
            id: Uuid::new_v4(),
            account_id: self.account_id,
            phone_number: self.phone_number,
            address: self.address,
            membership_date: self.membership_date,
        }
    }
}
