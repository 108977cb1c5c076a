//! Application attempts linking professionals to opportunities.

use rand::Rng;
use uuid::Uuid;

use super::opportunity::SeededOpportunity;
use super::professional::SeededProfessional;
use super::sample::{pick, text};

/// Review state stored in `applications.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// One application attempt.
///
/// Attempts are drawn with replacement, so a batch may contain the same
/// (user, opportunity) pair more than once. The seeder drops the repeats.
#[derive(Debug, Clone)]
pub struct GeneratedApplication {
    pub user_id: Uuid,
    pub applicant_name: String,
    pub opportunity_id: i32,
    pub opportunity_title: String,
    pub cover_letter: String,
    pub status: ApplicationStatus,
}

impl GeneratedApplication {
    /// The pair covered by the `applications` uniqueness constraint.
    pub fn key(&self) -> (Uuid, i32) {
        (self.user_id, self.opportunity_id)
    }
}

/// Configuration for application generation.
#[derive(Debug, Clone)]
pub struct ApplicationGenConfig {
    pub cover_letter_max_chars: usize,
}

impl Default for ApplicationGenConfig {
    fn default() -> Self {
        Self {
            cover_letter_max_chars: 500,
        }
    }
}

/// Generates application attempts.
pub struct ApplicationGenerator {
    config: ApplicationGenConfig,
}

impl ApplicationGenerator {
    pub fn new() -> Self {
        Self {
            config: ApplicationGenConfig::default(),
        }
    }

    pub fn with_config(config: ApplicationGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` attempts, each pairing a uniformly chosen
    /// professional with a uniformly chosen opportunity.
    pub fn generate_batch(
        &self,
        count: usize,
        professionals: &[SeededProfessional],
        opportunities: &[SeededOpportunity],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedApplication> {
        if professionals.is_empty() || opportunities.is_empty() {
            return Vec::new();
        }

        (0..count)
            .filter_map(|_| {
                let professional = pick(professionals, rng)?;
                let opportunity = pick(opportunities, rng)?;
                Some(self.generate(professional, opportunity, rng))
            })
            .collect()
    }

    /// Generates an attempt for a given pair.
    pub fn generate(
        &self,
        professional: &SeededProfessional,
        opportunity: &SeededOpportunity,
        rng: &mut impl Rng,
    ) -> GeneratedApplication {
        let cover_letter = text(self.config.cover_letter_max_chars, rng);
        let status = *pick(&ApplicationStatus::ALL, rng).unwrap_or(&ApplicationStatus::Pending);

        GeneratedApplication {
            user_id: professional.user_id,
            applicant_name: professional.name.clone(),
            opportunity_id: opportunity.id,
            opportunity_title: opportunity.title.clone(),
            cover_letter,
            status,
        }
    }
}

impl Default for ApplicationGenerator {
    fn default() -> Self {
        Self::new()
    }
}
