//! Repository for the `trip_places` junction table.
//!
//! Rows are always addressed by the compound key (trip_id, id): an itinerary
//! entry with a matching id but a different trip is treated as absent.

use sqlx::PgPool;
use triplan_core::types::DbId;

use crate::models::trip_place::{CreateTripPlace, TripPlace, UpdateTripPlace};

/// Column list for `trip_places` queries.
const COLUMNS: &str = "id, trip_id, place_id, day, planned_order, note";

/// Provides CRUD operations for itinerary entries.
pub struct TripPlaceRepo;

impl TripPlaceRepo {
    /// Attach a place to a trip. Trip and place existence are checked by the
    /// caller so each missing entity gets its own NotFound.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateTripPlace,
    ) -> Result<TripPlace, sqlx::Error> {
        let query = format!(
            "INSERT INTO trip_places (trip_id, place_id, day, planned_order, note) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(trip_id)
            .bind(input.place_id)
            .bind(input.day)
            .bind(input.planned_order)
            .bind(input.note.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List a trip's itinerary in presentation order: scheduled days first
    /// (ascending), unscheduled rows last, ties broken by planned_order and
    /// finally by insertion order.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<TripPlace>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trip_places \
             WHERE trip_id = $1 \
             ORDER BY day ASC NULLS LAST, planned_order ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Find an itinerary entry by its compound key.
    pub async fn find_for_trip(
        pool: &PgPool,
        trip_id: DbId,
        id: DbId,
    ) -> Result<Option<TripPlace>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trip_places WHERE id = $1 AND trip_id = $2");
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(id)
            .bind(trip_id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update an itinerary entry addressed by its compound key.
    ///
    /// Fields omitted from the payload keep their stored values; fields set
    /// to an explicit `null` are cleared. Returns `None` if no row matches
    /// both ids.
    pub async fn update(
        pool: &PgPool,
        trip_id: DbId,
        id: DbId,
        input: &UpdateTripPlace,
    ) -> Result<Option<TripPlace>, sqlx::Error> {
        let Some(existing) = Self::find_for_trip(pool, trip_id, id).await? else {
            return Ok(None);
        };

        let day = input.day.unwrap_or(existing.day);
        let planned_order = input.planned_order.unwrap_or(existing.planned_order);
        let note = input.note.clone().unwrap_or(existing.note);

        let query = format!(
            "UPDATE trip_places SET day = $3, planned_order = $4, note = $5 \
             WHERE id = $1 AND trip_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(id)
            .bind(trip_id)
            .bind(day)
            .bind(planned_order)
            .bind(note.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete an itinerary entry addressed by its compound key.
    ///
    /// Returns `false` if no row matches both ids.
    pub async fn delete(pool: &PgPool, trip_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_places WHERE id = $1 AND trip_id = $2")
            .bind(id)
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
