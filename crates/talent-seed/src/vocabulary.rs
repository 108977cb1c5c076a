//! Fixed value tables that generated records draw from.
//!
//! Generators never embed literals; they take a [`Vocabulary`] so tests can
//! substitute smaller tables.

/// Engineering skills.
pub const TECH_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "Vue.js",
    "Angular",
    "AWS",
    "Docker",
    "Kubernetes",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST APIs",
    "Machine Learning",
    "Data Science",
    "AI",
    "DevOps",
    "Git",
    "HTML/CSS",
    "Java",
    "C++",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "Next.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Microservices",
    "Serverless",
    "Cloud Computing",
    "Cybersecurity",
    "Blockchain",
];

/// Business and management skills.
pub const BUSINESS_SKILLS: &[&str] = &[
    "Project Management",
    "Product Management",
    "Business Analysis",
    "Strategy",
    "Marketing",
    "Sales",
    "Customer Success",
    "Data Analysis",
    "Financial Modeling",
    "Operations",
    "Leadership",
    "Team Management",
    "Agile",
    "Scrum",
    "Lean Startup",
];

/// Design skills.
pub const DESIGN_SKILLS: &[&str] = &[
    "UI/UX Design",
    "Figma",
    "Adobe Creative Suite",
    "Sketch",
    "Prototyping",
    "User Research",
    "Wireframing",
    "Visual Design",
    "Interaction Design",
    "Design Systems",
    "Branding",
    "Illustration",
];

/// Union of the three skill groups, in table order.
pub const ALL_SKILLS: &[&str] = &[
    // tech
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "Vue.js",
    "Angular",
    "AWS",
    "Docker",
    "Kubernetes",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST APIs",
    "Machine Learning",
    "Data Science",
    "AI",
    "DevOps",
    "Git",
    "HTML/CSS",
    "Java",
    "C++",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "Next.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Microservices",
    "Serverless",
    "Cloud Computing",
    "Cybersecurity",
    "Blockchain",
    // business
    "Project Management",
    "Product Management",
    "Business Analysis",
    "Strategy",
    "Marketing",
    "Sales",
    "Customer Success",
    "Data Analysis",
    "Financial Modeling",
    "Operations",
    "Leadership",
    "Team Management",
    "Agile",
    "Scrum",
    "Lean Startup",
    // design
    "UI/UX Design",
    "Figma",
    "Adobe Creative Suite",
    "Sketch",
    "Prototyping",
    "User Research",
    "Wireframing",
    "Visual Design",
    "Interaction Design",
    "Design Systems",
    "Branding",
    "Illustration",
];

/// Skills used by the reduced variant.
pub const CORE_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "Vue.js",
    "Angular",
    "AWS",
    "Docker",
    "PostgreSQL",
    "MongoDB",
    "GraphQL",
    "Machine Learning",
    "Product Management",
    "UI/UX Design",
    "DevOps",
    "Project Management",
];

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "E-commerce",
    "Education",
    "Media",
    "Real Estate",
    "Transportation",
    "Food & Beverage",
    "Gaming",
    "SaaS",
    "Fintech",
    "Biotech",
    "Clean Energy",
    "AI/ML",
    "Blockchain",
    "Cybersecurity",
];

pub const CORE_INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "E-commerce",
    "Education",
    "SaaS",
    "Fintech",
];

/// Literal location that always makes an opportunity remote.
pub const REMOTE: &str = "Remote";

pub const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Los Angeles, CA",
    "Chicago, IL",
    "Denver, CO",
    "Miami, FL",
    REMOTE,
    "London, UK",
    "Berlin, Germany",
    "Toronto, Canada",
    "Sydney, Australia",
];

/// Domestic offices an organization may be headquartered in.
pub const OFFICE_LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Los Angeles, CA",
    "Chicago, IL",
    "Denver, CO",
    "Miami, FL",
];

pub const CORE_LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    REMOTE,
];

pub const OPPORTUNITY_TITLES: &[&str] = &[
    "Senior Full Stack Developer",
    "Product Manager",
    "UX/UI Designer",
    "Data Scientist",
    "DevOps Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Machine Learning Engineer",
    "Product Designer",
    "Engineering Manager",
    "Technical Lead",
    "Software Architect",
    "Mobile Developer",
    "QA Engineer",
    "Business Analyst",
    "Marketing Manager",
    "Sales Director",
    "Customer Success Manager",
    "Operations Manager",
    "Head of Growth",
];

pub const CORE_OFFICE_LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
];

pub const CORE_OPPORTUNITY_TITLES: &[&str] = &[
    "Senior Full Stack Developer",
    "Product Manager",
    "UX Designer",
    "Data Scientist",
    "DevOps Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Engineering Manager",
    "Mobile Developer",
    "Marketing Manager",
    "Sales Director",
    "Business Analyst",
];

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];

/// A bundle of tables handed to the generators.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub skills: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub locations: &'static [&'static str],
    /// Subset of `locations` without remote entries.
    pub office_locations: &'static [&'static str],
    pub opportunity_titles: &'static [&'static str],
    pub company_sizes: &'static [&'static str],
}

impl Vocabulary {
    pub const fn full() -> Self {
        Self {
            skills: ALL_SKILLS,
            industries: INDUSTRIES,
            locations: LOCATIONS,
            office_locations: OFFICE_LOCATIONS,
            opportunity_titles: OPPORTUNITY_TITLES,
            company_sizes: COMPANY_SIZES,
        }
    }

    pub const fn reduced() -> Self {
        Self {
            skills: CORE_SKILLS,
            industries: CORE_INDUSTRIES,
            locations: CORE_LOCATIONS,
            office_locations: CORE_OFFICE_LOCATIONS,
            opportunity_titles: CORE_OPPORTUNITY_TITLES,
            company_sizes: COMPANY_SIZES,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_skills_is_union_of_groups() {
        let union: Vec<&str> = TECH_SKILLS
            .iter()
            .chain(BUSINESS_SKILLS)
            .chain(DESIGN_SKILLS)
            .copied()
            .collect();
        assert_eq!(union, ALL_SKILLS);
        assert_eq!(ALL_SKILLS.len(), 66);
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        for table in [
            ALL_SKILLS,
            CORE_SKILLS,
            INDUSTRIES,
            CORE_INDUSTRIES,
            LOCATIONS,
            CORE_LOCATIONS,
            OFFICE_LOCATIONS,
            OPPORTUNITY_TITLES,
            CORE_OPPORTUNITY_TITLES,
        ] {
            let unique: HashSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len());
        }
    }

    #[test]
    fn test_office_locations_are_non_remote_locations() {
        for vocab in [Vocabulary::full(), Vocabulary::reduced()] {
            assert!(!vocab.office_locations.contains(&REMOTE));
            assert!(vocab.locations.contains(&REMOTE));
            for office in vocab.office_locations {
                assert!(vocab.locations.contains(office));
            }
        }
    }
}
