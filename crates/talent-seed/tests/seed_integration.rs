//! Integration tests for seeding against PostgreSQL.
//!
//! These tests verify end-to-end behavior:
//! - Entity counts and one-to-one user/profile and user/organization links
//! - Foreign keys pointing at rows created in the same run
//! - The compensation policy as stored
//! - Purge idempotence and re-run behavior
//! - Duplicate application handling and rollback on failure
//!
//! To run these tests, you need a PostgreSQL database and `DATABASE_URL` set.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p talent-seed --test seed_integration`
//!
//! Each test creates its own schema from `fixtures/schema.sql` and drops it at
//! the end, so tests can run in parallel against a development database.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::collections::HashSet;
use talent_seed::builders::ScenarioBuilder;
use talent_seed::config::{DbSettings, Variant};
use talent_seed::db::Seeder;
use talent_seed::generators::{
    AccountRegistry, ApplicationGenerator, OpportunityGenerator, OrganizationGenerator, ProfessionalGenerator,
};
use uuid::Uuid;

const SCHEMA: &str = include_str!("fixtures/schema.sql");

/// A throwaway schema with the marketplace tables.
struct TestDb {
    pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    async fn cleanup(self) {
        self.pool.close().await;
        let _ = sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await;
        self.admin.close().await;
    }
}

/// Creates an isolated schema, skipping tests if DATABASE_URL is not set.
async fn setup() -> Option<TestDb> {
    let settings = DbSettings::from_env();
    if settings.database_url.is_none() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return None;
    }

    let options = match settings.connect_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Skipping test: invalid DATABASE_URL: {e}");
            return None;
        }
    };

    let admin = match PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options.clone())
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    let schema = format!("seed_test_{}", Uuid::new_v4().simple());
    sqlx::query(&format!("CREATE SCHEMA {schema}"))
        .execute(&admin)
        .await
        .expect("Failed to create test schema");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options.options([("search_path", schema.as_str())]))
        .await
        .expect("Failed to connect with test search_path");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to create marketplace tables");

    Some(TestDb {
        pool,
        admin,
        schema,
    })
}

async fn count(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(pool)
        .await
        .expect("count query failed")
}

/// Inserts an account the way a real OAuth sign-up would.
async fn insert_external_user(pool: &PgPool) -> String {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        r#"
        INSERT INTO users (id, email, first_name, last_name, auth_provider, user_type)
        VALUES ($1, $2, 'Real', 'Person', 'replit', 'talent')
        "#,
    )
    .bind(&id)
    .bind(format!("real-{id}@example.org"))
    .execute(pool)
    .await
    .expect("Failed to insert external user");
    id
}

#[tokio::test]
async fn test_default_run_creates_linked_records() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(1);

    let result = ScenarioBuilder::marketplace_demo()
        .build(pool, &mut rng)
        .await
        .expect("seed run failed");

    assert_eq!(result.professionals.len(), 15);
    assert_eq!(result.organizations.len(), 7);
    assert_eq!(result.opportunities.len(), 20);
    assert_eq!(result.applications.len() + result.skipped_applications, 25);

    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM users WHERE user_type = 'talent' AND auth_provider = 'email'").await,
        15
    );
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM users WHERE user_type = 'organization' AND auth_provider = 'email'").await,
        7
    );

    // Exactly one profile per talent user and one organization per organization user.
    assert_eq!(
        count(
            pool,
            r#"
            SELECT COUNT(*) FROM users u
            WHERE u.user_type = 'talent'
              AND (SELECT COUNT(*) FROM profiles p WHERE p.user_id = u.id) <> 1
            "#
        )
        .await,
        0
    );
    assert_eq!(
        count(
            pool,
            r#"
            SELECT COUNT(*) FROM users u
            WHERE u.user_type = 'organization'
              AND (SELECT COUNT(*) FROM organizations o WHERE o.user_id = u.id) <> 1
            "#
        )
        .await,
        0
    );
    assert_eq!(count(pool, "SELECT COUNT(*) FROM profiles").await, 15);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM organizations").await, 7);

    // Read-back ids match the database.
    let org_ids: HashSet<i32> = result.organizations.iter().map(|o| o.id).collect();
    let db_org_ids: HashSet<i32> = sqlx::query_scalar("SELECT organization_id FROM opportunities")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .collect();
    assert!(db_org_ids.is_subset(&org_ids));

    let opp_ids: HashSet<i32> = result.opportunities.iter().map(|o| o.id).collect();
    let user_ids: HashSet<String> = result
        .professionals
        .iter()
        .map(|p| p.user_id.to_string())
        .collect();
    let pairs: Vec<(String, i32)> =
        sqlx::query_as("SELECT user_id, opportunity_id FROM applications")
            .fetch_all(pool)
            .await
            .unwrap();
    assert_eq!(pairs.len(), result.applications.len());
    for (user_id, opportunity_id) in &pairs {
        assert!(user_ids.contains(user_id));
        assert!(opp_ids.contains(opportunity_id));
    }
    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), pairs.len());

    // Compensation policy as stored.
    assert_eq!(
        count(
            pool,
            r#"
            SELECT COUNT(*) FROM opportunities
            WHERE type = 'co-founder'
              AND NOT (salary_min = 0 AND salary_max = 50000
                       AND equity_min = '1%' AND equity_max = '5%')
            "#
        )
        .await,
        0
    );
    assert_eq!(
        count(
            pool,
            r#"
            SELECT COUNT(*) FROM opportunities
            WHERE type = 'contract'
              AND (equity_min IS NOT NULL OR equity_max IS NOT NULL OR salary_max <= salary_min)
            "#
        )
        .await,
        0
    );
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM opportunities WHERE status <> 'active'").await,
        0
    );

    // Skill subsets stay within bounds.
    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM profiles WHERE cardinality(skills) NOT BETWEEN 3 AND 7"
        )
        .await,
        0
    );
    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM opportunities WHERE cardinality(skills) NOT BETWEEN 3 AND 5"
        )
        .await,
        0
    );

    // The shared password verifies against a stored hash.
    let email = &result.professionals[0].email;
    let hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
    assert!(bcrypt::verify("password123", &hash).unwrap());

    db.cleanup().await;
}

#[tokio::test]
async fn test_rerun_leaves_one_generation() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(2);

    let first = ScenarioBuilder::new().build(pool, &mut rng).await.unwrap();
    assert!(first.purged.is_some_and(|s| s.total() == 0));

    let second = ScenarioBuilder::new().build(pool, &mut rng).await.unwrap();
    let purged = second.purged.unwrap();
    assert_eq!(purged.users, 22);
    assert_eq!(purged.profiles, 15);
    assert_eq!(purged.organizations, 7);
    assert_eq!(purged.opportunities, 20);
    assert_eq!(purged.applications, first.applications.len() as u64);

    assert_eq!(count(pool, "SELECT COUNT(*) FROM users").await, 22);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM profiles").await, 15);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM organizations").await, 7);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM opportunities").await, 20);
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM applications").await,
        second.applications.len() as i64
    );

    // Nothing from the first run survives.
    let first_ids: Vec<String> = first
        .professionals
        .iter()
        .map(|p| p.user_id.to_string())
        .collect();
    let leftover: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ANY($1)")
        .bind(&first_ids)
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(leftover, 0);

    db.cleanup().await;
}

#[tokio::test]
async fn test_reduced_rerun_without_purge_keeps_both_generations() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(8);

    let builder = ScenarioBuilder::reduced_demo().with_purge(false);
    let first = builder.build(pool, &mut rng).await.expect("first run failed");
    let second = builder.build(pool, &mut rng).await.expect("second run failed");
    assert!(second.purged.is_none());

    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM users WHERE user_type = 'organization'").await,
        14
    );
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM users WHERE user_type = 'talent'").await,
        30
    );

    // The numbered hiring addresses of the first run stay; the second run
    // gets suffixed ones.
    assert_eq!(first.organizations[0].email, "hiring@company1.com");
    assert_eq!(second.organizations[0].email, "hiring2@company1.com");

    db.cleanup().await;
}

#[tokio::test]
async fn test_same_seed_without_purge_avoids_existing_accounts() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;

    let builder = ScenarioBuilder::new().with_purge(false);
    let first = builder
        .build(pool, &mut StdRng::seed_from_u64(1))
        .await
        .expect("first run failed");
    let second = builder
        .build(pool, &mut StdRng::seed_from_u64(1))
        .await
        .expect("second run with the same seed failed");

    let first_ids: HashSet<Uuid> = first.professionals.iter().map(|p| p.user_id).collect();
    assert!(second.professionals.iter().all(|p| !first_ids.contains(&p.user_id)));
    assert_eq!(count(pool, "SELECT COUNT(*) FROM users").await, 44);
    assert_eq!(
        count(pool, "SELECT COUNT(DISTINCT email) FROM users").await,
        44
    );

    db.cleanup().await;
}

#[tokio::test]
async fn test_purge_is_noop_on_clean_database_and_spares_real_accounts() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;

    let stats = ScenarioBuilder::purge_only(pool).await.unwrap();
    assert_eq!(stats.total(), 0);

    let real_user = insert_external_user(pool).await;

    let stats = ScenarioBuilder::purge_only(pool).await.unwrap();
    assert_eq!(stats.total(), 0);

    let mut rng = StdRng::seed_from_u64(3);
    ScenarioBuilder::new()
        .with_professionals(3)
        .with_organizations(2)
        .with_opportunities(4)
        .with_applications(5)
        .build(pool, &mut rng)
        .await
        .unwrap();

    let stats = ScenarioBuilder::purge_only(pool).await.unwrap();
    assert_eq!(stats.users, 5);
    assert_eq!(stats.opportunities, 4);

    assert_eq!(count(pool, "SELECT COUNT(*) FROM users").await, 1);
    let remaining: String = sqlx::query_scalar("SELECT id FROM users")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(remaining, real_user);

    db.cleanup().await;
}

#[tokio::test]
async fn test_duplicate_applications_are_skipped() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(4);

    // One possible pair, so only the first attempt can land.
    let result = ScenarioBuilder::new()
        .with_professionals(1)
        .with_organizations(1)
        .with_opportunities(1)
        .with_applications(10)
        .build(pool, &mut rng)
        .await
        .unwrap();

    assert_eq!(result.applications.len(), 1);
    assert_eq!(result.skipped_applications, 9);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM applications").await, 1);

    db.cleanup().await;
}

#[tokio::test]
async fn test_unique_violation_keeps_transaction_usable() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(5);

    let mut accounts = AccountRegistry::new();
    let professionals =
        ProfessionalGenerator::new().generate_batch(1, "hash", &mut accounts, &mut rng);
    let organizations =
        OrganizationGenerator::new().generate_batch(1, "hash", &mut accounts, &mut rng);

    let mut seeder = Seeder::begin(pool).await.unwrap();
    let professionals = seeder.seed_professionals(&professionals).await.unwrap();
    let organizations = seeder.seed_organizations(&organizations).await.unwrap();
    let opportunities = OpportunityGenerator::new().generate_batch(2, &organizations, &mut rng);
    let opportunities = seeder.seed_opportunities(&opportunities).await.unwrap();

    let application =
        ApplicationGenerator::new().generate(&professionals[0], &opportunities[0], &mut rng);

    let first = seeder.seed_applications(&[application.clone()]).await.unwrap();
    assert_eq!(first.inserted.len(), 1);

    // A fresh call does not know the pair, so the database rejects it.
    let second = seeder.seed_applications(&[application]).await.unwrap();
    assert!(second.inserted.is_empty());
    assert_eq!(second.skipped, 1);

    // Later statements in the same transaction still succeed.
    let other =
        ApplicationGenerator::new().generate(&professionals[0], &opportunities[1], &mut rng);
    let third = seeder.seed_applications(&[other]).await.unwrap();
    assert_eq!(third.inserted.len(), 1);

    seeder.commit().await.unwrap();
    assert_eq!(count(pool, "SELECT COUNT(*) FROM applications").await, 2);

    db.cleanup().await;
}

#[tokio::test]
async fn test_failure_rolls_back_whole_run() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(6);

    let first = ScenarioBuilder::new().build(pool, &mut rng).await.unwrap();

    // Reject every opportunity so the next run fails after its purge and user inserts.
    sqlx::query("ALTER TABLE opportunities ADD CONSTRAINT no_new_rows CHECK (salary_min < 0) NOT VALID")
        .execute(pool)
        .await
        .unwrap();

    let failed = ScenarioBuilder::new().build(pool, &mut rng).await;
    assert!(failed.is_err());

    // The earlier generation is intact and nothing from the failed run landed.
    assert_eq!(count(pool, "SELECT COUNT(*) FROM users").await, 22);
    assert_eq!(count(pool, "SELECT COUNT(*) FROM opportunities").await, 20);
    let email = &first.professionals[0].email;
    let still_there: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(still_there, 1);

    db.cleanup().await;
}

#[tokio::test]
async fn test_reduced_variant() {
    let Some(db) = setup().await else { return };
    let pool = &db.pool;
    let mut rng = StdRng::seed_from_u64(7);

    let result = ScenarioBuilder::reduced_demo()
        .build(pool, &mut rng)
        .await
        .unwrap();
    assert_eq!(result.variant, Variant::Reduced);
    assert!(result.applications.is_empty());

    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM profiles WHERE cardinality(skills) NOT BETWEEN 3 AND 5"
        )
        .await,
        0
    );
    assert_eq!(
        count(
            pool,
            "SELECT COUNT(*) FROM profiles WHERE experience IS NOT NULL OR available_for IS NOT NULL"
        )
        .await,
        0
    );
    assert_eq!(
        count(pool, "SELECT COUNT(*) FROM users WHERE email LIKE 'hiring@company%.com'").await,
        7
    );
    assert_eq!(count(pool, "SELECT COUNT(*) FROM applications").await, 0);

    db.cleanup().await;
}
