//! Repository for the `places` table.
//!
//! Place deletion cascades to dependent itinerary, bookmark, and review rows
//! inside a single transaction so no orphans survive.

use sqlx::PgPool;
use triplan_core::types::DbId;

use crate::models::place::{CreatePlace, Place, PlaceListParams, UpdatePlace};

/// Column list for `places` queries.
const COLUMNS: &str = "id, city, name, category";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place and return the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (city, name, category) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.city)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a place by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List places, optionally filtered by exact city and/or category,
    /// newest first. The full result set is returned; there is no pagination.
    pub async fn list(pool: &PgPool, params: &PlaceListParams) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places \
             WHERE ($1::text IS NULL OR city = $1) \
               AND ($2::text IS NULL OR category = $2) \
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(params.city.as_deref())
            .bind(params.category.as_deref())
            .fetch_all(pool)
            .await
    }

    /// Partially update a place. Omitted fields keep their stored values.
    ///
    /// Returns `None` if no place with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET \
                 city = COALESCE($2, city), \
                 name = COALESCE($3, name), \
                 category = COALESCE($4, category) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(input.city.as_deref())
            .bind(input.name.as_deref())
            .bind(input.category.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a place together with all rows that reference it.
    ///
    /// Dependent `trip_places`, `bookmarks`, and `reviews` rows are removed
    /// first, in the same transaction. Returns `false` (and commits nothing)
    /// if the place does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM trip_places WHERE place_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM bookmarks WHERE place_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM reviews WHERE place_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Nothing to delete; dropping the transaction rolls back.
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
