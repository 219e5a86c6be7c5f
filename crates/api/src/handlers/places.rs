//! Handlers for the `/places` resource.
//!
//! Places are the hub of the data model: itinerary entries, bookmarks, and
//! reviews all reference them, so deletion cascades to those tables.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use triplan_core::error::CoreError;
use triplan_core::types::DbId;
use triplan_core::validate::require_non_empty;
use triplan_db::models::place::{CreatePlace, PlaceListParams, UpdatePlace};
use triplan_db::repositories::PlaceRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /places
///
/// Create a place. All three fields are required and non-empty; duplicates
/// are allowed.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlace>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("city", &input.city)?;
    require_non_empty("name", &input.name)?;
    require_non_empty("category", &input.category)?;

    let place = PlaceRepo::create(&state.pool, &input).await?;

    tracing::info!(place_id = place.id, "Place created");

    Ok((StatusCode::CREATED, Json(place)))
}

/// GET /places?city=&category=
///
/// List places, optionally filtered by exact city and/or category, newest
/// first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PlaceListParams>,
) -> AppResult<impl IntoResponse> {
    let places = PlaceRepo::list(&state.pool, &params).await?;

    Ok(Json(places))
}

/// GET /places/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let place = PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        })?;

    Ok(Json(place))
}

/// PUT /places/{id}
///
/// Partial update: only fields present in the body are overwritten.
pub async fn update(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Json(input): Json<UpdatePlace>,
) -> AppResult<impl IntoResponse> {
    if let Some(city) = &input.city {
        require_non_empty("city", city)?;
    }
    if let Some(name) = &input.name {
        require_non_empty("name", name)?;
    }
    if let Some(category) = &input.category {
        require_non_empty("category", category)?;
    }

    let place = PlaceRepo::update(&state.pool, place_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        })?;

    Ok(Json(place))
}

/// DELETE /places/{id}
///
/// Delete a place and, first, every itinerary entry, bookmark, and review
/// that references it.
pub async fn delete(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PlaceRepo::delete(&state.pool, place_id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        }
        .into());
    }

    tracing::info!(place_id, "Place deleted with dependent rows");

    Ok(StatusCode::NO_CONTENT)
}
