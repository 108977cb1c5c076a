//! Seed script - fills the marketplace database with synthetic data
//!
//! Run with:
//! ```
//! cargo run -p talent-seed --bin seed
//! ```
//!
//! Connection settings come from `DATABASE_URL`, or from `PGHOST`, `PGPORT`,
//! `PGUSER`, `PGPASSWORD` and `PGDATABASE` when it is unset.

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::postgres::PgPoolOptions;
use talent_seed::builders::ScenarioBuilder;
use talent_seed::config::{DbSettings, SeedConfig, Variant};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Complete records from the large vocabularies
    Full,
    /// Smaller vocabularies and sparser records
    Reduced,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => Variant::Full,
            VariantArg::Reduced => Variant::Reduced,
        }
    }
}

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Populate the talent marketplace database with synthetic data")]
struct Cli {
    /// Postgres connection URL (defaults to DATABASE_URL, then the PG* variables)
    #[arg(long)]
    database_url: Option<String>,

    /// Number of talent accounts with profiles
    #[arg(long, default_value = "15")]
    professionals: usize,

    /// Number of organization accounts
    #[arg(long, default_value = "7")]
    organizations: usize,

    /// Number of opportunities
    #[arg(long, default_value = "20")]
    opportunities: usize,

    /// Number of application attempts (duplicates are skipped)
    #[arg(long, default_value = "25")]
    applications: usize,

    /// Record flavour
    #[arg(long, value_enum, default_value = "full")]
    variant: VariantArg,

    /// Keep rows from earlier runs
    #[arg(long, conflicts_with = "purge_only")]
    no_purge: bool,

    /// Only delete earlier synthetic rows
    #[arg(long)]
    purge_only: bool,

    /// RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let settings = DbSettings::or_env(cli.database_url.clone());
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(settings.connect_options()?)
        .await?;

    tracing::info!("Connected to database");

    let outcome = run(&cli, &pool).await;
    pool.close().await;

    if let Err(e) = &outcome {
        tracing::error!("Error generating synthetic data: {e}");
    }
    outcome
}

async fn run(cli: &Cli, pool: &sqlx::PgPool) -> anyhow::Result<()> {
    if cli.purge_only {
        let stats = ScenarioBuilder::purge_only(pool).await?;
        tracing::info!("Purge completed: {} rows removed", stats.total());
        return Ok(());
    }

    let config = SeedConfig {
        professional_count: cli.professionals,
        organization_count: cli.organizations,
        opportunity_count: cli.opportunities,
        application_count: cli.applications,
        variant: cli.variant.into(),
        purge: !cli.no_purge,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = ScenarioBuilder::from_config(&config)
        .build(pool, &mut rng)
        .await?;

    let summary = result.summary();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.log();
    }

    Ok(())
}
