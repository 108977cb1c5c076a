//! Database seeding utilities.

use std::collections::HashSet;

use sqlx::{Connection, PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SYNTHETIC_AUTH_PROVIDER;
use crate::generators::{
    AccountRegistry, ApplicationStatus, GeneratedApplication, GeneratedOpportunity, GeneratedOrganization,
    GeneratedProfessional, GeneratedUser, SeededOpportunity, SeededOrganization,
    SeededProfessional,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Rows removed by [`Seeder::purge`], per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeStats {
    pub applications: u64,
    pub opportunities: u64,
    pub organizations: u64,
    pub profiles: u64,
    pub users: u64,
}

impl PurgeStats {
    pub fn total(&self) -> u64 {
        self.applications + self.opportunities + self.organizations + self.profiles + self.users
    }
}

/// An application row that was written.
#[derive(Debug, Clone)]
pub struct SeededApplication {
    pub id: i32,
    pub user_id: Uuid,
    pub opportunity_id: i32,
    pub status: ApplicationStatus,
}

/// Result of [`Seeder::seed_applications`].
#[derive(Debug, Clone, Default)]
pub struct ApplicationOutcome {
    pub inserted: Vec<SeededApplication>,
    /// Attempts dropped because the (user, opportunity) pair already applied.
    pub skipped: usize,
}

/// Writes generated data inside a single transaction.
///
/// Nothing is visible to other sessions until [`Seeder::commit`]. Dropping
/// a seeder without committing rolls everything back.
pub struct Seeder {
    tx: Transaction<'static, Postgres>,
}

impl Seeder {
    /// Opens the transaction every later insert runs in.
    pub async fn begin(pool: &PgPool) -> Result<Self, SeedError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Commits everything written so far.
    pub async fn commit(self) -> Result<(), SeedError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discards everything written so far.
    pub async fn rollback(self) -> Result<(), SeedError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Deletes every row that belongs to a synthetic account.
    ///
    /// Children go first so foreign keys never block a delete. Rows owned by
    /// other accounts are untouched, except applications that point at a
    /// synthetic opportunity. Running it on a clean database deletes nothing.
    pub async fn purge(&mut self) -> Result<PurgeStats, SeedError> {
        info!("Purging synthetic data...");

        let applications = sqlx::query(
            r#"
            DELETE FROM applications
            WHERE user_id IN (SELECT id FROM users WHERE auth_provider = $1)
               OR opportunity_id IN (
                    SELECT o.id
                    FROM opportunities o
                    JOIN organizations g ON g.id = o.organization_id
                    JOIN users u ON u.id = g.user_id
                    WHERE u.auth_provider = $1
               )
            "#,
        )
        .bind(SYNTHETIC_AUTH_PROVIDER)
        .execute(&mut *self.tx)
        .await?
        .rows_affected();

        let opportunities = sqlx::query(
            r#"
            DELETE FROM opportunities
            WHERE organization_id IN (
                SELECT g.id
                FROM organizations g
                JOIN users u ON u.id = g.user_id
                WHERE u.auth_provider = $1
            )
            "#,
        )
        .bind(SYNTHETIC_AUTH_PROVIDER)
        .execute(&mut *self.tx)
        .await?
        .rows_affected();

        let organizations = sqlx::query(
            r#"
            DELETE FROM organizations
            WHERE user_id IN (SELECT id FROM users WHERE auth_provider = $1)
            "#,
        )
        .bind(SYNTHETIC_AUTH_PROVIDER)
        .execute(&mut *self.tx)
        .await?
        .rows_affected();

        let profiles = sqlx::query(
            r#"
            DELETE FROM profiles
            WHERE user_id IN (SELECT id FROM users WHERE auth_provider = $1)
            "#,
        )
        .bind(SYNTHETIC_AUTH_PROVIDER)
        .execute(&mut *self.tx)
        .await?
        .rows_affected();

        let users = sqlx::query("DELETE FROM users WHERE auth_provider = $1")
            .bind(SYNTHETIC_AUTH_PROVIDER)
            .execute(&mut *self.tx)
            .await?
            .rows_affected();

        let stats = PurgeStats {
            applications,
            opportunities,
            organizations,
            profiles,
            users,
        };

        info!(
            applications,
            opportunities,
            organizations,
            profiles,
            users,
            "Purged {} synthetic rows",
            stats.total()
        );
        Ok(stats)
    }

    /// Loads the ids and emails of every account currently in `users`.
    ///
    /// Generation claims from the returned registry, so new accounts never
    /// collide with rows that survived (or skipped) the purge.
    pub async fn taken_accounts(&mut self) -> Result<AccountRegistry, SeedError> {
        let rows: Vec<(String, Option<String>)> = sqlx::query_as("SELECT id, email FROM users")
            .fetch_all(&mut *self.tx)
            .await?;

        let mut accounts = AccountRegistry::new();
        for (id, email) in rows {
            if let Ok(id) = Uuid::parse_str(&id) {
                accounts.reserve_id(id);
            }
            if let Some(email) = email {
                accounts.reserve_email(email);
            }
        }

        debug!("Loaded {} existing account emails", accounts.email_count());
        Ok(accounts)
    }

    /// Seeds talent users, each followed by its profile.
    pub async fn seed_professionals(
        &mut self,
        professionals: &[GeneratedProfessional],
    ) -> Result<Vec<SeededProfessional>, SeedError> {
        info!("Seeding {} professionals...", professionals.len());

        let mut seeded = Vec::with_capacity(professionals.len());
        for professional in professionals {
            self.insert_user(&professional.user).await?;
            self.insert_profile(professional).await?;

            debug!(
                "  Created professional: {} ({})",
                professional.user.display_name(),
                professional.user.email
            );
            seeded.push(SeededProfessional::from(professional));
        }

        info!("Seeded {} professionals", seeded.len());
        Ok(seeded)
    }

    /// Seeds organization users, each followed by its company row.
    ///
    /// The returned records carry the database-assigned `organizations.id`.
    pub async fn seed_organizations(
        &mut self,
        organizations: &[GeneratedOrganization],
    ) -> Result<Vec<SeededOrganization>, SeedError> {
        info!("Seeding {} organizations...", organizations.len());

        let mut seeded = Vec::with_capacity(organizations.len());
        for org in organizations {
            self.insert_user(&org.user).await?;
            let id = self.insert_organization(org).await?;

            debug!(
                "  Created organization: {} ({}) id={id}",
                org.company.company_name, org.user.email
            );
            seeded.push(SeededOrganization::new(id, org));
        }

        info!("Seeded {} organizations", seeded.len());
        Ok(seeded)
    }

    /// Seeds opportunities; the returned records carry their database ids.
    pub async fn seed_opportunities(
        &mut self,
        opportunities: &[GeneratedOpportunity],
    ) -> Result<Vec<SeededOpportunity>, SeedError> {
        info!("Seeding {} opportunities...", opportunities.len());

        let mut seeded = Vec::with_capacity(opportunities.len());
        for opp in opportunities {
            let id = self.insert_opportunity(opp).await?;

            debug!(
                "  Created opportunity: {} at {} ({})",
                opp.title,
                opp.company_name,
                opp.compensation.salary_range()
            );
            seeded.push(SeededOpportunity::new(id, opp));
        }

        info!("Seeded {} opportunities", seeded.len());
        Ok(seeded)
    }

    /// Seeds applications, dropping attempts whose (user, opportunity) pair
    /// already applied.
    ///
    /// Dropped attempts are neither retried nor counted as inserted.
    pub async fn seed_applications(
        &mut self,
        applications: &[GeneratedApplication],
    ) -> Result<ApplicationOutcome, SeedError> {
        info!("Seeding {} applications...", applications.len());

        let mut outcome = ApplicationOutcome::default();
        let mut applied: HashSet<(Uuid, i32)> = HashSet::new();

        for app in applications {
            if !applied.insert(app.key()) {
                debug!(
                    "  Skipped duplicate application: {} -> {}",
                    app.applicant_name, app.opportunity_title
                );
                outcome.skipped += 1;
                continue;
            }

            match self.try_insert_application(app).await? {
                Some(id) => {
                    debug!(
                        "  Created application: {} -> {}",
                        app.applicant_name, app.opportunity_title
                    );
                    outcome.inserted.push(SeededApplication {
                        id,
                        user_id: app.user_id,
                        opportunity_id: app.opportunity_id,
                        status: app.status,
                    });
                }
                None => {
                    warn!(
                        "  Application already on record: {} -> {}",
                        app.applicant_name, app.opportunity_title
                    );
                    outcome.skipped += 1;
                }
            }
        }

        info!(
            "Seeded {} applications ({} duplicates skipped)",
            outcome.inserted.len(),
            outcome.skipped
        );
        Ok(outcome)
    }

    /// Inserts a single user row.
    async fn insert_user(&mut self, user: &GeneratedUser) -> Result<(), SeedError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, password_hash, auth_provider, user_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(SYNTHETIC_AUTH_PROVIDER)
        .bind(user.user_type.as_str())
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    /// Inserts the profile of a professional whose user row already exists.
    async fn insert_profile(&mut self, professional: &GeneratedProfessional) -> Result<(), SeedError> {
        let profile = &professional.profile;

        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, title, bio, skills, experience, location,
                salary_expectation, available_for, is_public
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(professional.user.id.to_string())
        .bind(&profile.title)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .bind(&profile.experience)
        .bind(&profile.location)
        .bind(&profile.salary_expectation)
        .bind(&profile.available_for)
        .bind(profile.is_public)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    /// Inserts a company row and returns its generated id.
    async fn insert_organization(&mut self, org: &GeneratedOrganization) -> Result<i32, SeedError> {
        let company = &org.company;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO organizations (
                user_id, company_name, description, website,
                industry, size, location, founded_year
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(org.user.id.to_string())
        .bind(&company.company_name)
        .bind(&company.description)
        .bind(&company.website)
        .bind(&company.industry)
        .bind(&company.size)
        .bind(&company.location)
        .bind(company.founded_year)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(id)
    }

    /// Inserts an opportunity and returns its generated id.
    async fn insert_opportunity(&mut self, opp: &GeneratedOpportunity) -> Result<i32, SeedError> {
        let pay = &opp.compensation;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO opportunities (
                organization_id, title, description, requirements,
                skills, type, location, is_remote,
                salary_min, salary_max, equity_min, equity_max, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'active')
            RETURNING id
            "#,
        )
        .bind(opp.organization_id)
        .bind(&opp.title)
        .bind(&opp.description)
        .bind(&opp.requirements)
        .bind(&opp.skills)
        .bind(opp.job_type.as_str())
        .bind(&opp.location)
        .bind(opp.is_remote)
        .bind(pay.salary_min)
        .bind(pay.salary_max)
        .bind(&pay.equity_min)
        .bind(&pay.equity_max)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(id)
    }

    /// Inserts an application inside a savepoint.
    ///
    /// Returns `None` when the uniqueness constraint rejects the pair; only
    /// the savepoint is rolled back, so the outer transaction stays usable.
    async fn try_insert_application(
        &mut self,
        app: &GeneratedApplication,
    ) -> Result<Option<i32>, SeedError> {
        let mut savepoint = Connection::begin(&mut *self.tx).await?;

        let inserted = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO applications (opportunity_id, user_id, cover_letter, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(app.opportunity_id)
        .bind(app.user_id.to_string())
        .bind(&app.cover_letter)
        .bind(app.status.as_str())
        .fetch_one(&mut *savepoint)
        .await;

        match inserted {
            Ok(id) => {
                savepoint.commit().await?;
                Ok(Some(id))
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                savepoint.rollback().await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
