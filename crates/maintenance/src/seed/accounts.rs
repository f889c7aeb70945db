//! Demo administrator and member accounts.

use std::sync::Arc;

use catalog::{
    AccountRepository,
    auth::AccountRegistration,
    models::{Account, AccountRole, NewMemberProfile},
};
use time::OffsetDateTime;
use tracing::info;

use super::SeedError;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "Admin123!";

const MEMBER_USERNAME: &str = "user";
const MEMBER_EMAIL: &str = "user@example.com";
const MEMBER_PASSWORD: &str = "User123!";
const MEMBER_PHONE: &str = "5551234567";
const MEMBER_ADDRESS: &str = "Örnek Adres, İstanbul";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSeedReport {
    pub admin_created: bool,
    pub member_created: bool,
}

pub struct AccountSeeder {
    repo: Arc<dyn AccountRepository>,
}

impl AccountSeeder {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Creates each demo account whose username is missing. Existing
    /// accounts are left untouched.
    pub async fn seed(&self) -> Result<AccountSeedReport, SeedError> {
        let mut report = AccountSeedReport::default();

        if self.repo.find_account_by_username(ADMIN_USERNAME).await?.is_none() {
            self.create(AccountRegistration {
                username: ADMIN_USERNAME.to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: AccountRole::Admin,
            })
            .await?;
            report.admin_created = true;
            info!("Admin account created");
        } else {
            info!("Admin account already exists");
        }

        if self.repo.find_account_by_username(MEMBER_USERNAME).await?.is_none() {
            let member = self
                .create(AccountRegistration {
                    username: MEMBER_USERNAME.to_string(),
                    email: MEMBER_EMAIL.to_string(),
                    password: MEMBER_PASSWORD.to_string(),
                    first_name: "Normal".to_string(),
                    last_name: "User".to_string(),
                    role: AccountRole::Member,
                })
                .await?;

            self.repo
                .create_member_profile(NewMemberProfile {
                    account_id: member.id,
                    phone_number: MEMBER_PHONE.to_string(),
                    address: MEMBER_ADDRESS.to_string(),
                    membership_date: OffsetDateTime::now_utc().date(),
                })
                .await?;
            report.member_created = true;
            info!("Member account created");
        } else {
            info!("Member account already exists");
        }

        info!("Admin login: username={ADMIN_USERNAME} password={ADMIN_PASSWORD}");
        info!("Member login: username={MEMBER_USERNAME} password={MEMBER_PASSWORD}");

        Ok(report)
    }

    async fn create(&self, registration: AccountRegistration) -> Result<Account, SeedError> {
        let account = registration.into_new_account()?;
        Ok(self.repo.create_account(account).await?)
    }
}
