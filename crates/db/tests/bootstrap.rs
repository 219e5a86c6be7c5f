use sqlx::PgPool;

/// Full bootstrap test: connect, ensure schema, verify tables.
#[sqlx::test]
async fn test_full_bootstrap(pool: PgPool) {
    triplan_db::health_check(&pool).await.unwrap();
    triplan_db::ensure_schema(&pool).await.unwrap();

    // Verify all five entity tables exist and are queryable.
    let tables = ["places", "trips", "trip_places", "bookmarks", "reviews"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should exist and start empty");
    }
}

/// Running the bootstrap against an already initialized database is a no-op.
#[sqlx::test]
async fn test_bootstrap_is_idempotent(pool: PgPool) {
    triplan_db::ensure_schema(&pool).await.unwrap();
    triplan_db::ensure_schema(&pool).await.unwrap();
}

/// The bookmark uniqueness constraint is created with the bootstrap.
#[sqlx::test]
async fn test_bookmark_unique_constraint_exists(pool: PgPool) {
    triplan_db::ensure_schema(&pool).await.unwrap();

    let found: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pg_constraint WHERE conname = 'uq_bookmark_place_user'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(found.0, 1);
}
