//! Handlers for the `/trips` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use triplan_core::error::CoreError;
use triplan_core::trip::validate_date_range;
use triplan_core::types::DbId;
use triplan_core::validate::require_non_empty;
use triplan_db::models::trip::{CreateTrip, UpdateTrip};
use triplan_db::repositories::TripRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /trips
///
/// Create a trip. The date range is inclusive; `end_date` must not precede
/// `start_date` (equal dates are a single-day trip).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    validate_date_range(input.start_date, input.end_date)?;

    let trip = TripRepo::create(&state.pool, &input).await?;

    tracing::info!(trip_id = trip.id, "Trip created");

    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /trips
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let trips = TripRepo::list(&state.pool).await?;

    Ok(Json(trips))
}

/// GET /trips/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trip = TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    Ok(Json(trip))
}

/// PUT /trips/{id}
///
/// Partial update. The date-ordering invariant is re-checked against the
/// *effective* dates: any field omitted from the payload keeps its stored
/// value before the comparison.
pub async fn update(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_non_empty("name", name)?;
    }

    let existing = TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    let name = input.name.unwrap_or(existing.name);
    let start_date = input.start_date.unwrap_or(existing.start_date);
    let end_date = input.end_date.unwrap_or(existing.end_date);

    validate_date_range(start_date, end_date)?;

    let trip = TripRepo::update(&state.pool, trip_id, &name, start_date, end_date)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    Ok(Json(trip))
}

/// DELETE /trips/{id}
///
/// Delete a trip and its itinerary entries.
pub async fn delete(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TripRepo::delete(&state.pool, trip_id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }
        .into());
    }

    tracing::info!(trip_id, "Trip deleted with itinerary rows");

    Ok(StatusCode::NO_CONTENT)
}
