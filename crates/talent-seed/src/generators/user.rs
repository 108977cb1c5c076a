//! Account generation shared by professionals and organizations.

use std::collections::HashSet;

use rand::Rng;
use uuid::{Builder, Uuid};

/// Account kind stored in `users.user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Talent,
    Organization,
}

impl UserType {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Talent => "talent",
            UserType::Organization => "organization",
        }
    }
}

/// Generated account data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub user_type: UserType,
}

impl GeneratedUser {
    /// Display name: "First Last" for people, the company name for organizations.
    pub fn display_name(&self) -> String {
        match self.user_type {
            UserType::Talent => format!("{} {}", self.first_name, self.last_name),
            UserType::Organization => self.first_name.clone(),
        }
    }
}

/// Hashes the shared password with bcrypt at the library's default cost.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Lowercases and strips everything except ASCII letters and digits.
pub fn email_slug(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Hands out account ids and email addresses that are unique within a run
/// and against accounts already stored.
///
/// An email clash gets a numeric suffix on the local part (`jane.doe2@...`);
/// an id clash draws a fresh id.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    ids: HashSet<Uuid>,
    emails: HashSet<String>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an existing account id as taken.
    pub fn reserve_id(&mut self, id: Uuid) {
        self.ids.insert(id);
    }

    /// Marks an existing email address as taken.
    pub fn reserve_email(&mut self, email: impl Into<String>) {
        self.emails.insert(email.into());
    }

    /// Draws a random (version 4) id from `rng` that is not yet taken.
    pub fn claim_id(&mut self, rng: &mut impl Rng) -> Uuid {
        loop {
            let id = Builder::from_random_bytes(rng.r#gen()).into_uuid();
            if self.ids.insert(id) {
                return id;
            }
        }
    }

    /// Reserves `local@domain`, or the first free suffixed form of it.
    pub fn claim_email(&mut self, local: &str, domain: &str) -> String {
        let local = if local.is_empty() { "user" } else { local };

        let mut candidate = format!("{local}@{domain}");
        let mut n = 2;
        while self.emails.contains(&candidate) {
            candidate = format!("{local}{n}@{domain}");
            n += 1;
        }

        self.emails.insert(candidate.clone());
        candidate
    }

    pub fn email_count(&self) -> usize {
        self.emails.len()
    }
}
