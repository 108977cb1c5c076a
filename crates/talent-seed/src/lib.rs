//! Synthetic data seeding for the talent marketplace.
//!
//! This crate fills the marketplace database with fake professionals,
//! organizations, job opportunities, and applications for manual testing and
//! demos. Every generated account is marked with `auth_provider = 'email'`, and
//! a run first purges rows created by earlier runs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use talent_seed::prelude::*;
//!
//! let result = ScenarioBuilder::marketplace_demo()
//!     .build(&pool, &mut rng)
//!     .await?;
//! result.summary().log();
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod vocabulary;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioResult, SeedSummary};
    pub use crate::config::{DbSettings, SHARED_PASSWORD, SeedConfig, Variant};
    pub use crate::db::{PurgeStats, SeedError, Seeder};
    pub use crate::generators::{
        ApplicationGenerator, ApplicationStatus, Compensation, JobType, OpportunityGenerator,
        OrganizationGenerator, ProfessionalGenerator,
    };
    pub use crate::vocabulary::Vocabulary;
}
