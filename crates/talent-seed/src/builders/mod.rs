//! Fluent builder APIs for seeding runs.
//!
//! The [`ScenarioBuilder`] sequences purge, generation and inserts inside one
//! transaction and reports what it wrote.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioResult, SeedSummary};
