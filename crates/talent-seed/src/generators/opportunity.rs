//! Job opportunity generation with the type-dependent compensation policy.

use fake::{Fake, faker::lorem::en::Sentence};
use rand::Rng;

use super::organization::SeededOrganization;
use super::sample::{choose_distinct, pick, text};
use crate::config::Variant;
use crate::vocabulary::{REMOTE, Vocabulary};

/// Engagement type stored in `opportunities.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    CoFounder,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::CoFounder,
    ];

    /// Database strings, in the same order as [`JobType::ALL`].
    pub const NAMES: &'static [&'static str] = &["full-time", "part-time", "contract", "co-founder"];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::CoFounder => "co-founder",
        }
    }
}

/// Salary and equity offered for an opportunity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compensation {
    pub salary_min: i32,
    pub salary_max: i32,
    pub equity_min: Option<String>,
    pub equity_max: Option<String>,
}

impl Compensation {
    /// Draws compensation for `job_type`.
    ///
    /// - co-founder: 0..50000 with 1%..5% equity
    /// - contract: min in 50k..150k, max 20k..50k above it, no equity
    /// - full-time/part-time: min in 60k..120k, max 20k..80k above it,
    ///   0.1%..2% equity half of the time
    ///
    /// All random amounts are whole thousands.
    pub fn for_job_type(job_type: JobType, rng: &mut impl Rng) -> Self {
        match job_type {
            JobType::CoFounder => Self {
                salary_min: 0,
                salary_max: 50_000,
                equity_min: Some("1%".to_string()),
                equity_max: Some("5%".to_string()),
            },
            JobType::Contract => {
                let salary_min = rng.gen_range(50..=150) * 1000;
                Self {
                    salary_min,
                    salary_max: salary_min + rng.gen_range(20..=50) * 1000,
                    equity_min: None,
                    equity_max: None,
                }
            }
            JobType::FullTime | JobType::PartTime => {
                let salary_min = rng.gen_range(60..=120) * 1000;
                let salary_max = salary_min + rng.gen_range(20..=80) * 1000;
                let equity_min = rng.gen_bool(0.5).then(|| "0.1%".to_string());
                let equity_max = equity_min.as_ref().map(|_| "2%".to_string());
                Self {
                    salary_min,
                    salary_max,
                    equity_min,
                    equity_max,
                }
            }
        }
    }

    /// Short human-readable range, e.g. `$80k-$120k` or `Equity only`.
    pub fn salary_range(&self) -> String {
        if self.salary_max > 0 {
            format!("${}k-${}k", self.salary_min / 1000, self.salary_max / 1000)
        } else {
            "Equity only".to_string()
        }
    }
}

/// Generated opportunity ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedOpportunity {
    /// `organizations.id` of the owning organization.
    pub organization_id: i32,
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub job_type: JobType,
    pub location: String,
    pub is_remote: bool,
    pub compensation: Compensation,
}

/// An opportunity that exists in the database.
#[derive(Debug, Clone)]
pub struct SeededOpportunity {
    pub id: i32,
    pub title: String,
    pub company_name: String,
    pub job_type: JobType,
}

impl SeededOpportunity {
    pub fn new(id: i32, opp: &GeneratedOpportunity) -> Self {
        Self {
            id,
            title: opp.title.clone(),
            company_name: opp.company_name.clone(),
            job_type: opp.job_type,
        }
    }
}

/// Configuration for opportunity generation.
#[derive(Debug, Clone)]
pub struct OpportunityGenConfig {
    pub vocabulary: Vocabulary,
    pub description_max_chars: usize,
    /// Inclusive bounds on the number of requirement sentences.
    pub requirements: (usize, usize),
    /// Inclusive bounds on the number of skills.
    pub skills: (usize, usize),
}

impl OpportunityGenConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            vocabulary: variant.vocabulary(),
            description_max_chars: match variant {
                Variant::Full => 800,
                Variant::Reduced => 400,
            },
            requirements: (3, 6),
            skills: (3, 5),
        }
    }
}

impl Default for OpportunityGenConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Full)
    }
}

/// Generates opportunities spread over already-seeded organizations.
pub struct OpportunityGenerator {
    config: OpportunityGenConfig,
}

impl OpportunityGenerator {
    pub fn new() -> Self {
        Self {
            config: OpportunityGenConfig::default(),
        }
    }

    pub fn with_config(config: OpportunityGenConfig) -> Self {
        Self { config }
    }

    /// Generates `count` opportunities, each owned by an organization picked
    /// uniformly from `organizations`.
    pub fn generate_batch(
        &self,
        count: usize,
        organizations: &[SeededOrganization],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedOpportunity> {
        if organizations.is_empty() {
            return Vec::new();
        }

        (0..count)
            .filter_map(|_| {
                let org = pick(organizations, rng)?;
                Some(self.generate(org, rng))
            })
            .collect()
    }

    /// Generates a single opportunity for `org`.
    pub fn generate(&self, org: &SeededOrganization, rng: &mut impl Rng) -> GeneratedOpportunity {
        let vocab = &self.config.vocabulary;
        let (req_min, req_max) = self.config.requirements;
        let (skills_min, skills_max) = self.config.skills;

        let title = pick(vocab.opportunity_titles, rng)
            .map(|s| s.to_string())
            .unwrap_or_default();
        let description = text(self.config.description_max_chars, rng);
        let requirements: Vec<String> = (0..rng.gen_range(req_min..=req_max))
            .map(|_| Sentence(4..10).fake_with_rng(rng))
            .collect();
        let skills = choose_distinct(vocab.skills, skills_min, skills_max, rng);
        let job_type = *pick(&JobType::ALL, rng).unwrap_or(&JobType::FullTime);
        let location = pick(vocab.locations, rng)
            .map(|s| s.to_string())
            .unwrap_or_default();
        let is_remote = location == REMOTE || rng.gen_bool(0.5);
        let compensation = Compensation::for_job_type(job_type, rng);

        GeneratedOpportunity {
            organization_id: org.id,
            company_name: org.company_name.clone(),
            title,
            description,
            requirements,
            skills,
            job_type,
            location,
            is_remote,
            compensation,
        }
    }
}

impl Default for OpportunityGenerator {
    fn default() -> Self {
        Self::new()
    }
}
