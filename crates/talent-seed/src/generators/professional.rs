//! Talent accounts and their profiles.

use fake::{
    Fake,
    faker::{
        internet::en::FreeEmailProvider,
        job::en::Title,
        name::en::{FirstName, LastName},
    },
};
use rand::Rng;
use uuid::Uuid;

use super::opportunity::JobType;
use super::sample::{choose_distinct, pick, text};
use super::user::{AccountRegistry, GeneratedUser, UserType, email_slug};
use crate::config::Variant;
use crate::vocabulary::Vocabulary;

/// Generated profile data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProfile {
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub location: String,
    pub salary_expectation: String,
    pub available_for: Option<Vec<String>>,
    pub is_public: bool,
}

/// A talent user together with the profile inserted right after it.
#[derive(Debug, Clone)]
pub struct GeneratedProfessional {
    pub user: GeneratedUser,
    pub profile: GeneratedProfile,
}

/// A professional that exists in the database.
///
/// This is what later steps (applications) work from.
#[derive(Debug, Clone)]
pub struct SeededProfessional {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&GeneratedProfessional> for SeededProfessional {
    fn from(p: &GeneratedProfessional) -> Self {
        Self {
            user_id: p.user.id,
            email: p.user.email.clone(),
            name: p.user.display_name(),
        }
    }
}

/// Configuration for professional generation.
#[derive(Debug, Clone)]
pub struct ProfessionalGenConfig {
    pub vocabulary: Vocabulary,
    /// Inclusive bounds on the number of profile skills.
    pub skills: (usize, usize),
    /// Inclusive bounds, in thousands of dollars, for the salary expectation.
    pub salary_k: (u32, u32),
    pub bio_max_chars: usize,
    /// `None` leaves `experience` empty.
    pub experience_max_chars: Option<usize>,
    /// `None` leaves `available_for` empty.
    pub available_for: Option<(usize, usize)>,
    /// Fixed email domain; a random free-mail provider when unset.
    pub email_domain: Option<String>,
}

impl ProfessionalGenConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Full => Self {
                vocabulary: Vocabulary::full(),
                skills: variant.profile_skill_bounds(),
                salary_k: (60, 200),
                bio_max_chars: 300,
                experience_max_chars: Some(500),
                available_for: Some((1, 3)),
                email_domain: None,
            },
            Variant::Reduced => Self {
                vocabulary: Vocabulary::reduced(),
                skills: variant.profile_skill_bounds(),
                salary_k: (60, 150),
                bio_max_chars: 200,
                experience_max_chars: None,
                available_for: None,
                email_domain: Some("example.com".to_string()),
            },
        }
    }
}

impl Default for ProfessionalGenConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Full)
    }
}

/// Generates talent users with profiles.
pub struct ProfessionalGenerator {
    config: ProfessionalGenConfig,
}

impl ProfessionalGenerator {
    /// Creates a new generator with the full-variant configuration.
    pub fn new() -> Self {
        Self {
            config: ProfessionalGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProfessionalGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single professional.
    ///
    /// `password_hash` is the pre-computed hash of the shared password.
    pub fn generate(
        &self,
        password_hash: &str,
        accounts: &mut AccountRegistry,
        rng: &mut impl Rng,
    ) -> GeneratedProfessional {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);

        let domain = match &self.config.email_domain {
            Some(domain) => domain.clone(),
            None => FreeEmailProvider().fake_with_rng(rng),
        };
        let local = format!("{}.{}", email_slug(&first_name), email_slug(&last_name));
        let email = accounts.claim_email(&local, &domain);

        let user = GeneratedUser {
            id: accounts.claim_id(rng),
            email,
            first_name,
            last_name,
            password_hash: password_hash.to_string(),
            user_type: UserType::Talent,
        };

        GeneratedProfessional {
            user,
            profile: self.generate_profile(rng),
        }
    }

    /// Generates multiple professionals, claiming ids and emails from `accounts`.
    pub fn generate_batch(
        &self,
        count: usize,
        password_hash: &str,
        accounts: &mut AccountRegistry,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedProfessional> {
        (0..count)
            .map(|_| self.generate(password_hash, accounts, rng))
            .collect()
    }

    fn generate_profile(&self, rng: &mut impl Rng) -> GeneratedProfile {
        let vocab = &self.config.vocabulary;
        let (skills_min, skills_max) = self.config.skills;
        let (salary_lo, salary_hi) = self.config.salary_k;

        let location = pick(vocab.locations, rng)
            .map(|l| l.to_string())
            .unwrap_or_default();

        GeneratedProfile {
            title: Title().fake_with_rng(rng),
            bio: text(self.config.bio_max_chars, rng),
            skills: choose_distinct(vocab.skills, skills_min, skills_max, rng),
            experience: self.config.experience_max_chars.map(|max| text(max, rng)),
            location,
            salary_expectation: format!("${}k", rng.gen_range(salary_lo..=salary_hi)),
            available_for: self
                .config
                .available_for
                .map(|(min, max)| choose_distinct(JobType::NAMES, min, max, rng)),
            is_public: true,
        }
    }
}

impl Default for ProfessionalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
