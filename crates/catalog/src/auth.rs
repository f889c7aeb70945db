use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::CatalogError,
    models::{AccountRole, NewAccount},
};

/// Plain-text account details, validated and hashed before they reach a
/// repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AccountRegistration {
    #[validate(length(
        min = 1,
        max = 150,
        message = "Username must be between 1 and 150 characters"
    ))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AccountRole,
}

impl AccountRegistration {
    /// Validates the registration and hashes its password.
    pub fn into_new_account(self) -> Result<NewAccount, CatalogError> {
        self.validate().map_err(|e| {
            let messages: Vec<String> = e
                .field_errors()
                .into_iter()
                .flat_map(|(_, errors)| {
                    errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                })
                .collect();
            CatalogError::InvalidInput(messages.join(", "))
        })?;

        let password_hash = hash_password(&self.password)?;

        Ok(NewAccount {
            username: self.username,
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
        })
    }
}

pub fn hash_password(password: &str) -> Result<String, CatalogError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CatalogError::InvalidInput(format!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, CatalogError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| CatalogError::InvalidInput(format!("Invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
