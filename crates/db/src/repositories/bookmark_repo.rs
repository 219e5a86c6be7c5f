//! Repository for the `bookmarks` table.
//!
//! Duplicate detection relies on the `uq_bookmark_place_user` unique
//! constraint: the insert is attempted first and a violation is classified
//! afterwards, so concurrent identical requests cannot both succeed.

use sqlx::PgPool;
use triplan_core::types::DbId;

use crate::models::bookmark::Bookmark;

/// Column list for `bookmarks` queries.
const COLUMNS: &str = "id, place_id, user_name, created_at";

/// Provides create/delete operations for bookmarks.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Insert a bookmark and return the created row.
    ///
    /// A duplicate (place_id, user_name) pair surfaces as a database error
    /// carrying the unique-constraint violation; see [`is_unique_violation`].
    pub async fn create(
        pool: &PgPool,
        place_id: DbId,
        user_name: &str,
    ) -> Result<Bookmark, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookmarks (place_id, user_name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bookmark>(&query)
            .bind(place_id)
            .bind(user_name)
            .fetch_one(pool)
            .await
    }

    /// Delete the bookmark matching the compound key (place_id, user_name).
    ///
    /// Returns `false` if no matching row exists.
    pub async fn delete(
        pool: &PgPool,
        place_id: DbId,
        user_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE place_id = $1 AND user_name = $2")
            .bind(place_id)
            .bind(user_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count bookmarks for a place (test support and future stats).
    pub async fn count_for_place(pool: &PgPool, place_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookmarks WHERE place_id = $1")
            .bind(place_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}

/// Whether a sqlx error is a PostgreSQL unique-constraint violation (23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}
