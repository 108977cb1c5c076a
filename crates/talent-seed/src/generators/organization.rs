//! Organization accounts and their company records.

use fake::{Fake, faker::company::en::CompanyName};
use rand::Rng;
use uuid::Uuid;

use super::sample::{pick, text};
use super::user::{AccountRegistry, GeneratedUser, UserType, email_slug};
use crate::config::Variant;
use crate::vocabulary::Vocabulary;

/// Placeholder stored in `users.last_name` for organization accounts.
pub const ORGANIZATION_LAST_NAME: &str = "Team";

/// Generated organization row ready for database insertion.
///
/// The surrogate `id` is assigned by the database on insert.
#[derive(Debug, Clone)]
pub struct GeneratedCompany {
    pub company_name: String,
    pub description: String,
    pub website: Option<String>,
    pub industry: String,
    pub size: Option<String>,
    pub location: String,
    pub founded_year: Option<i32>,
}

/// An organization-type user together with its company row.
#[derive(Debug, Clone)]
pub struct GeneratedOrganization {
    pub user: GeneratedUser,
    pub company: GeneratedCompany,
}

/// An organization that exists in the database.
///
/// `id` is the `organizations.id` read back from the insert; opportunities
/// reference it rather than the owning user.
#[derive(Debug, Clone)]
pub struct SeededOrganization {
    pub id: i32,
    pub user_id: Uuid,
    pub company_name: String,
    pub email: String,
    pub industry: String,
}

impl SeededOrganization {
    pub fn new(id: i32, org: &GeneratedOrganization) -> Self {
        Self {
            id,
            user_id: org.user.id,
            company_name: org.company.company_name.clone(),
            email: org.user.email.clone(),
            industry: org.company.industry.clone(),
        }
    }
}

/// How the hiring email of an organization is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiringEmail {
    /// `hiring@<companyslug>.com`
    FromCompanyName,
    /// `hiring@company<n>.com`, numbered from 1.
    Numbered,
}

/// Configuration for organization generation.
#[derive(Debug, Clone)]
pub struct OrganizationGenConfig {
    pub vocabulary: Vocabulary,
    pub hiring_email: HiringEmail,
    pub description_max_chars: usize,
    /// Also fill website, size bucket and founded year.
    pub detailed: bool,
    /// Inclusive founding year range.
    pub founded: (i32, i32),
}

impl OrganizationGenConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Full => Self {
                vocabulary: Vocabulary::full(),
                hiring_email: HiringEmail::FromCompanyName,
                description_max_chars: 400,
                detailed: true,
                founded: (2010, 2023),
            },
            Variant::Reduced => Self {
                vocabulary: Vocabulary::reduced(),
                hiring_email: HiringEmail::Numbered,
                description_max_chars: 300,
                detailed: false,
                founded: (2010, 2023),
            },
        }
    }
}

impl Default for OrganizationGenConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Full)
    }
}

/// Generates organization users with company records.
pub struct OrganizationGenerator {
    config: OrganizationGenConfig,
}

impl OrganizationGenerator {
    pub fn new() -> Self {
        Self {
            config: OrganizationGenConfig::default(),
        }
    }

    pub fn with_config(config: OrganizationGenConfig) -> Self {
        Self { config }
    }

    /// Generates the organization at position `index` (zero-based) of a batch.
    pub fn generate(
        &self,
        index: usize,
        password_hash: &str,
        accounts: &mut AccountRegistry,
        rng: &mut impl Rng,
    ) -> GeneratedOrganization {
        let company_name: String = CompanyName().fake_with_rng(rng);
        let slug = email_slug(&company_name);

        let email = match self.config.hiring_email {
            HiringEmail::FromCompanyName => {
                accounts.claim_email("hiring", &format!("{slug}.com"))
            }
            HiringEmail::Numbered => {
                accounts.claim_email("hiring", &format!("company{}.com", index + 1))
            }
        };

        let user = GeneratedUser {
            id: accounts.claim_id(rng),
            email,
            first_name: company_name.clone(),
            last_name: ORGANIZATION_LAST_NAME.to_string(),
            password_hash: password_hash.to_string(),
            user_type: UserType::Organization,
        };

        let company = self.generate_company(company_name, &slug, rng);
        GeneratedOrganization { user, company }
    }

    /// Generates multiple organizations, claiming ids and emails from `accounts`.
    pub fn generate_batch(
        &self,
        count: usize,
        password_hash: &str,
        accounts: &mut AccountRegistry,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOrganization> {
        (0..count)
            .map(|i| self.generate(i, password_hash, accounts, rng))
            .collect()
    }

    fn generate_company(
        &self,
        company_name: String,
        slug: &str,
        rng: &mut impl Rng,
    ) -> GeneratedCompany {
        let vocab = &self.config.vocabulary;
        let detailed = self.config.detailed;
        let (founded_lo, founded_hi) = self.config.founded;

        let description = text(self.config.description_max_chars, rng);
        let industry = pick(vocab.industries, rng)
            .map(|s| s.to_string())
            .unwrap_or_default();
        let size = if detailed {
            pick(vocab.company_sizes, rng).map(|s| s.to_string())
        } else {
            None
        };
        let location = pick(vocab.office_locations, rng)
            .map(|s| s.to_string())
            .unwrap_or_default();
        let founded_year = detailed.then(|| rng.gen_range(founded_lo..=founded_hi));

        GeneratedCompany {
            website: detailed.then(|| format!("https://www.{slug}.com")),
            company_name,
            description,
            industry,
            size,
            location,
            founded_year,
        }
    }
}

impl Default for OrganizationGenerator {
    fn default() -> Self {
        Self::new()
    }
}
