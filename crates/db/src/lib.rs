//! Database access layer: pool construction, startup schema bootstrap, and
//! per-entity repositories over PostgreSQL via sqlx.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

/// Shared connection pool handed to every request handler.
pub type DbPool = sqlx::PgPool;

/// Maximum pooled connections.
const MAX_CONNECTIONS: u32 = 10;

/// Schema bootstrap statements, applied in dependency order.
///
/// Every statement is `IF NOT EXISTS` so startup against an already
/// initialized database is a no-op. Existing mismatched schemas are not
/// migrated.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS places (
        id BIGSERIAL PRIMARY KEY,
        city TEXT NOT NULL,
        name TEXT NOT NULL,
        category TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_places_city ON places (city)",
    "CREATE INDEX IF NOT EXISTS idx_places_name ON places (name)",
    "CREATE INDEX IF NOT EXISTS idx_places_category ON places (category)",
    "CREATE TABLE IF NOT EXISTS trips (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_trips_name ON trips (name)",
    "CREATE TABLE IF NOT EXISTS trip_places (
        id BIGSERIAL PRIMARY KEY,
        trip_id BIGINT NOT NULL REFERENCES trips(id),
        place_id BIGINT NOT NULL REFERENCES places(id),
        day INTEGER,
        planned_order INTEGER,
        note TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_trip_places_trip_id ON trip_places (trip_id)",
    "CREATE INDEX IF NOT EXISTS idx_trip_places_place_id ON trip_places (place_id)",
    "CREATE TABLE IF NOT EXISTS bookmarks (
        id BIGSERIAL PRIMARY KEY,
        place_id BIGINT NOT NULL REFERENCES places(id),
        user_name TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        CONSTRAINT uq_bookmark_place_user UNIQUE (place_id, user_name)
    )",
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_place_id ON bookmarks (place_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_user_name ON bookmarks (user_name)",
    "CREATE TABLE IF NOT EXISTS reviews (
        id BIGSERIAL PRIMARY KEY,
        place_id BIGINT NOT NULL REFERENCES places(id),
        user_name TEXT NOT NULL,
        rating INTEGER NOT NULL,
        comment TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS idx_reviews_place_id ON reviews (place_id)",
];

/// Create the shared connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure all entity tables and indexes exist. Idempotent.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(
        statements = SCHEMA_STATEMENTS.len(),
        "Schema bootstrap complete"
    );
    Ok(())
}
