//! Handlers for the `/places/{id}/bookmark` resource.
//!
//! Duplicate detection deliberately attempts the insert first and classifies
//! the unique-constraint violation afterwards. A pre-check would reintroduce
//! a race window under concurrent identical requests.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use triplan_core::error::CoreError;
use triplan_core::types::DbId;
use triplan_core::validate::require_non_empty;
use triplan_db::models::bookmark::{CreateBookmark, RemoveBookmarkParams};
use triplan_db::repositories::bookmark_repo::is_unique_violation;
use triplan_db::repositories::{BookmarkRepo, PlaceRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /places/{id}/bookmark
///
/// Bookmark a place for a user. At most one bookmark per (place, user).
pub async fn create(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Json(input): Json<CreateBookmark>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("user_name", &input.user_name)?;

    PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        })?;

    let bookmark = match BookmarkRepo::create(&state.pool, place_id, &input.user_name).await {
        Ok(bookmark) => bookmark,
        Err(err) if is_unique_violation(&err) => {
            return Err(CoreError::Conflict(format!(
                "Place {place_id} is already bookmarked by '{}'",
                input.user_name
            ))
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(place_id, user_name = %input.user_name, "Bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// DELETE /places/{id}/bookmark?user_name=
///
/// Remove a user's bookmark, addressed by (place_id, user_name) together.
pub async fn remove(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Query(params): Query<RemoveBookmarkParams>,
) -> AppResult<impl IntoResponse> {
    let deleted = BookmarkRepo::delete(&state.pool, place_id, &params.user_name).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Bookmark",
            id: place_id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
