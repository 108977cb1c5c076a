//! Database integration for seeding synthetic data.
//!
//! The [`Seeder`] writes generated records inside one transaction, reads back
//! database-assigned ids, and purges earlier synthetic rows.

mod seeder;

pub use seeder::{ApplicationOutcome, PurgeStats, SeedError, SeededApplication, Seeder};
