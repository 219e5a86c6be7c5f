//! Repository for the `trips` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use triplan_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip};

/// Column list for `trips` queries.
const COLUMNS: &str = "id, name, start_date, end_date";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip and return the created row. The date-ordering
    /// invariant is validated by the caller before this is reached.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (name, start_date, end_date) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trips, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips ORDER BY id DESC");
        sqlx::query_as::<_, Trip>(&query).fetch_all(pool).await
    }

    /// Overwrite a trip with already-merged absolute values.
    ///
    /// The handler fetches the current row, merges the partial payload, and
    /// re-validates the effective date range before calling this. Returns
    /// `None` if the trip vanished between the fetch and the write.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET name = $2, start_date = $3, end_date = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(name)
            .bind(start_date)
            .bind(end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip together with its itinerary rows, in one transaction.
    ///
    /// Returns `false` (and commits nothing) if the trip does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM trip_places WHERE trip_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
