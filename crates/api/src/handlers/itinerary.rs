//! Handlers for the `/trips/{id}/places` resource (itinerary entries).
//!
//! Entries are always addressed by (trip_id, item_id) together, so an item
//! id reached through the wrong trip is NotFound rather than leaking across
//! trips.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use triplan_core::error::CoreError;
use triplan_core::types::DbId;
use triplan_core::validate::validate_positive;
use triplan_db::models::trip_place::{CreateTripPlace, UpdateTripPlace};
use triplan_db::repositories::{PlaceRepo, TripPlaceRepo, TripRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /trips/{id}/places
///
/// Attach a place to a trip's itinerary. Trip and place are checked
/// separately so the error names whichever entity is missing.
pub async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateTripPlace>,
) -> AppResult<impl IntoResponse> {
    validate_positive("day", input.day)?;
    validate_positive("planned_order", input.planned_order)?;

    TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    PlaceRepo::find_by_id(&state.pool, input.place_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: input.place_id,
        })?;

    let item = TripPlaceRepo::create(&state.pool, trip_id, &input).await?;

    tracing::info!(trip_id, item_id = item.id, "Itinerary entry created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /trips/{id}/places
///
/// List a trip's itinerary: scheduled days ascending, unscheduled entries
/// last, ties broken by planned_order and then insertion order.
pub async fn list(
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TripRepo::find_by_id(&state.pool, trip_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        })?;

    let items = TripPlaceRepo::list_for_trip(&state.pool, trip_id).await?;

    Ok(Json(items))
}

/// PATCH /trips/{id}/places/{item_id}
///
/// Partial update. Omitted fields keep their stored values; explicit `null`
/// clears the field.
pub async fn update(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTripPlace>,
) -> AppResult<impl IntoResponse> {
    if let Some(day) = input.day {
        validate_positive("day", day)?;
    }
    if let Some(planned_order) = input.planned_order {
        validate_positive("planned_order", planned_order)?;
    }

    let item = TripPlaceRepo::update(&state.pool, trip_id, item_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Itinerary entry",
            id: item_id,
        })?;

    Ok(Json(item))
}

/// DELETE /trips/{id}/places/{item_id}
pub async fn remove(
    State(state): State<AppState>,
    Path((trip_id, item_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let deleted = TripPlaceRepo::delete(&state.pool, trip_id, item_id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Itinerary entry",
            id: item_id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
