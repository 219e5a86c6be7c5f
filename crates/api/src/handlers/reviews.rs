//! Handlers for the `/places/{id}/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use triplan_core::error::CoreError;
use triplan_core::review::validate_rating;
use triplan_core::types::DbId;
use triplan_core::validate::require_non_empty;
use triplan_db::models::review::CreateReview;
use triplan_db::repositories::{PlaceRepo, ReviewRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /places/{id}/reviews
///
/// Create a review with a rating in `[1, 5]` and an optional comment.
pub async fn create(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("user_name", &input.user_name)?;
    validate_rating(input.rating)?;

    PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        })?;

    let review = ReviewRepo::create(&state.pool, place_id, &input).await?;

    tracing::info!(place_id, review_id = review.id, "Review created");

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /places/{id}/reviews
///
/// List a place's reviews, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        })?;

    let reviews = ReviewRepo::list_for_place(&state.pool, place_id).await?;

    Ok(Json(reviews))
}
