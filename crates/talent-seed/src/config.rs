//! Configuration types for marketplace seeding.

use sqlx::postgres::PgConnectOptions;

use crate::vocabulary::Vocabulary;

/// Password shared by every synthetic account.
///
/// Hashed once per run and reused for all generated users.
pub const SHARED_PASSWORD: &str = "password123";

/// Marker stored in `users.auth_provider` for every generated account.
///
/// The purge step uses this to tell synthetic rows apart from accounts
/// created through OAuth sign-ups.
pub const SYNTHETIC_AUTH_PROVIDER: &str = "email";

/// Which flavour of synthetic data to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Complete records drawn from the large vocabularies.
    #[default]
    Full,
    /// Smaller vocabularies and sparser profiles/organizations.
    Reduced,
}

impl Variant {
    /// Returns the vocabulary tables for this variant.
    pub fn vocabulary(&self) -> Vocabulary {
        match self {
            Variant::Full => Vocabulary::full(),
            Variant::Reduced => Vocabulary::reduced(),
        }
    }

    /// Inclusive bounds for the number of skills on a profile.
    pub fn profile_skill_bounds(&self) -> (usize, usize) {
        match self {
            Variant::Full => (3, 7),
            Variant::Reduced => (3, 5),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Reduced => "reduced",
        }
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Number of talent users (each with one profile).
    pub professional_count: usize,

    /// Number of organization users (each with one organization row).
    pub organization_count: usize,

    /// Number of opportunities spread across the organizations.
    pub opportunity_count: usize,

    /// Number of application attempts. Duplicates are dropped, so the
    /// inserted count may be lower.
    pub application_count: usize,

    /// Record flavour.
    pub variant: Variant,

    /// Whether to delete previously generated rows first.
    pub purge: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            professional_count: 15,
            organization_count: 7,
            opportunity_count: 20,
            application_count: 25,
            variant: Variant::Full,
            purge: true,
        }
    }
}

/// Database connection settings.
///
/// A full `DATABASE_URL` wins; otherwise the libpq environment variables
/// (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`, `PGDATABASE`) are used.
#[derive(Debug, Clone, Default)]
pub struct DbSettings {
    pub database_url: Option<String>,
}

impl DbSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
        }
    }

    /// Uses `database_url` when given, else falls back to [`DbSettings::from_env`].
    pub fn or_env(database_url: Option<String>) -> Self {
        match database_url {
            Some(url) => Self {
                database_url: Some(url),
            },
            None => Self::from_env(),
        }
    }

    /// Builds connection options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.database_url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()),
        }
    }
}
