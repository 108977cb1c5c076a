//! Entity generators for synthetic marketplace data.
//!
//! Generators only produce values; [`crate::db::Seeder`] writes them.
//! - [`ProfessionalGenerator`]: talent users with profiles
//! - [`OrganizationGenerator`]: organization users with company records
//! - [`OpportunityGenerator`]: job listings for seeded organizations
//! - [`ApplicationGenerator`]: professionals applying to opportunities

pub mod application;
pub mod opportunity;
pub mod organization;
pub mod professional;
pub mod sample;
pub mod user;

pub use application::{
    ApplicationGenConfig, ApplicationGenerator, ApplicationStatus, GeneratedApplication,
};
pub use opportunity::{
    Compensation, GeneratedOpportunity, JobType, OpportunityGenConfig, OpportunityGenerator,
    SeededOpportunity,
};
pub use organization::{
    GeneratedCompany, GeneratedOrganization, HiringEmail, OrganizationGenConfig,
    OrganizationGenerator, SeededOrganization,
};
pub use professional::{
    GeneratedProfessional, GeneratedProfile, ProfessionalGenConfig, ProfessionalGenerator,
    SeededProfessional,
};
pub use user::{AccountRegistry, GeneratedUser, UserType, hash_password};
