//! Repository for the `reviews` table.

use sqlx::PgPool;
use triplan_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, place_id, user_name, rating, comment, created_at";

/// Provides create/list operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review and return the created row. The rating range is
    /// validated by the caller before this is reached.
    pub async fn create(
        pool: &PgPool,
        place_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (place_id, user_name, rating, comment) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(place_id)
            .bind(&input.user_name)
            .bind(input.rating)
            .bind(input.comment.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List all reviews for a place, newest first.
    pub async fn list_for_place(pool: &PgPool, place_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews WHERE place_id = $1 ORDER BY id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(place_id)
            .fetch_all(pool)
            .await
    }
}
