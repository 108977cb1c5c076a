//! Fluent builder that runs a complete seeding pass.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::config::{SHARED_PASSWORD, SeedConfig, Variant};
use crate::db::{PurgeStats, SeedError, SeededApplication, Seeder};
use crate::generators::{
    ApplicationGenerator, OpportunityGenConfig, OpportunityGenerator, OrganizationGenConfig,
    OrganizationGenerator, ProfessionalGenConfig, ProfessionalGenerator, SeededOpportunity,
    SeededOrganization, SeededProfessional, hash_password,
};

/// Everything a committed run wrote.
#[derive(Debug)]
pub struct ScenarioResult {
    pub variant: Variant,
    /// `None` when the purge step was disabled.
    pub purged: Option<PurgeStats>,
    pub professionals: Vec<SeededProfessional>,
    pub organizations: Vec<SeededOrganization>,
    pub opportunities: Vec<SeededOpportunity>,
    pub applications: Vec<SeededApplication>,
    /// Application attempts dropped as duplicates.
    pub skipped_applications: usize,
    /// Plain-text password shared by every generated account.
    pub password: String,
    pub elapsed_ms: u64,
}

impl ScenarioResult {
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            variant: self.variant.as_str(),
            professionals: self.professionals.len(),
            organizations: self.organizations.len(),
            opportunities: self.opportunities.len(),
            applications: self.applications.len(),
            skipped_applications: self.skipped_applications,
            example_professional: self.professionals.first().map(|p| p.email.clone()),
            example_organization: self.organizations.first().map(|o| o.email.clone()),
            password: self.password.clone(),
            elapsed_ms: self.elapsed_ms,
        }
    }
}

/// Human- and machine-readable report of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub variant: &'static str,
    pub professionals: usize,
    pub organizations: usize,
    pub opportunities: usize,
    pub applications: usize,
    pub skipped_applications: usize,
    pub example_professional: Option<String>,
    pub example_organization: Option<String>,
    pub password: String,
    pub elapsed_ms: u64,
}

impl SeedSummary {
    /// Writes the summary as log lines.
    pub fn log(&self) {
        info!("Seed completed in {}ms ({} variant)", self.elapsed_ms, self.variant);
        info!("  Professionals: {}", self.professionals);
        info!("  Organizations: {}", self.organizations);
        info!("  Opportunities: {}", self.opportunities);
        info!(
            "  Applications: {} ({} duplicates skipped)",
            self.applications, self.skipped_applications
        );
        info!("Login credentials:");
        info!("  Password for all users: {}", self.password);
        if let Some(email) = &self.example_professional {
            info!("  Example professional: {email}");
        }
        if let Some(email) = &self.example_organization {
            info!("  Example organization: {email}");
        }
    }
}

/// Builder for a seeding run.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_professionals(30)
///     .with_organizations(10)
///     .with_opportunities(40)
///     .with_applications(60)
///     .build(&pool, &mut rng)
///     .await?;
/// result.summary().log();
/// ```
pub struct ScenarioBuilder {
    professional_count: usize,
    organization_count: usize,
    opportunity_count: usize,
    application_count: usize,
    variant: Variant,
    purge: bool,
    password: String,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a builder with the default counts (15/7/20/25, full variant).
    pub fn new() -> Self {
        Self::from_config(&SeedConfig::default())
    }

    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            professional_count: config.professional_count,
            organization_count: config.organization_count,
            opportunity_count: config.opportunity_count,
            application_count: config.application_count,
            variant: config.variant,
            purge: config.purge,
            password: SHARED_PASSWORD.to_string(),
        }
    }

    pub fn with_professionals(mut self, count: usize) -> Self {
        self.professional_count = count;
        self
    }

    pub fn with_organizations(mut self, count: usize) -> Self {
        self.organization_count = count;
        self
    }

    pub fn with_opportunities(mut self, count: usize) -> Self {
        self.opportunity_count = count;
        self
    }

    /// Sets the number of application attempts.
    pub fn with_applications(mut self, count: usize) -> Self {
        self.application_count = count;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Enables or disables deleting earlier synthetic rows first.
    pub fn with_purge(mut self, enabled: bool) -> Self {
        self.purge = enabled;
        self
    }

    /// Overrides the shared password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Runs purge and generation in one transaction and commits it.
    ///
    /// Any failure rolls the whole run back and is returned to the caller,
    /// except duplicate applications, which are skipped.
    pub async fn build(
        &self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let start = Instant::now();

        // Hashed once; every generated account shares it.
        let password_hash = hash_password(&self.password)?;

        let mut seeder = Seeder::begin(pool).await?;
        match self.populate(&mut seeder, &password_hash, rng).await {
            Ok(mut result) => {
                seeder.commit().await?;
                result.elapsed_ms = start.elapsed().as_millis() as u64;
                Ok(result)
            }
            Err(e) => {
                error!("Seeding failed, rolling back: {e}");
                if let Err(rollback_err) = seeder.rollback().await {
                    warn!("Rollback failed: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    /// Deletes earlier synthetic rows in a transaction of its own.
    pub async fn purge_only(pool: &PgPool) -> Result<PurgeStats, SeedError> {
        let mut seeder = Seeder::begin(pool).await?;
        match seeder.purge().await {
            Ok(stats) => {
                seeder.commit().await?;
                Ok(stats)
            }
            Err(e) => {
                error!("Purge failed, rolling back: {e}");
                if let Err(rollback_err) = seeder.rollback().await {
                    warn!("Rollback failed: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    async fn populate(
        &self,
        seeder: &mut Seeder,
        password_hash: &str,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let purged = if self.purge {
            Some(seeder.purge().await?)
        } else {
            None
        };

        let mut accounts = seeder.taken_accounts().await?;

        let professionals =
            ProfessionalGenerator::with_config(ProfessionalGenConfig::for_variant(self.variant))
                .generate_batch(self.professional_count, password_hash, &mut accounts, rng);
        let professionals = seeder.seed_professionals(&professionals).await?;

        let organizations =
            OrganizationGenerator::with_config(OrganizationGenConfig::for_variant(self.variant))
                .generate_batch(self.organization_count, password_hash, &mut accounts, rng);
        let organizations = seeder.seed_organizations(&organizations).await?;

        if organizations.is_empty() && self.opportunity_count > 0 {
            warn!("No organizations to own opportunities; skipping opportunities");
        }
        let opportunities =
            OpportunityGenerator::with_config(OpportunityGenConfig::for_variant(self.variant))
                .generate_batch(self.opportunity_count, &organizations, rng);
        let opportunities = seeder.seed_opportunities(&opportunities).await?;

        if (professionals.is_empty() || opportunities.is_empty()) && self.application_count > 0 {
            warn!("No professionals or opportunities to pair; skipping applications");
        }
        let applications = ApplicationGenerator::new().generate_batch(
            self.application_count,
            &professionals,
            &opportunities,
            rng,
        );
        let outcome = seeder.seed_applications(&applications).await?;

        Ok(ScenarioResult {
            variant: self.variant,
            purged,
            professionals,
            organizations,
            opportunities,
            applications: outcome.inserted,
            skipped_applications: outcome.skipped,
            password: self.password.clone(),
            elapsed_ms: 0,
        })
    }
}

/// Preset scenarios.
impl ScenarioBuilder {
    /// The standard demo dataset.
    ///
    /// - 15 professionals, 7 organizations
    /// - 20 opportunities, 25 application attempts
    pub fn marketplace_demo() -> Self {
        Self::new()
    }

    /// Smaller records from the reduced vocabularies, no applications.
    pub fn reduced_demo() -> Self {
        Self::new()
            .with_variant(Variant::Reduced)
            .with_applications(0)
    }
}
