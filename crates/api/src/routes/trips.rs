//! Route definitions for trips and their nested itinerary resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{itinerary, trips};
use crate::state::AppState;

/// Trip routes mounted at `/trips`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete (cascades to itinerary)
/// GET    /{id}/places                 -> itinerary::list (sorted)
/// POST   /{id}/places                 -> itinerary::create
/// PATCH  /{id}/places/{item_id}       -> itinerary::update
/// DELETE /{id}/places/{item_id}       -> itinerary::remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list).post(trips::create))
        .route(
            "/{id}",
            get(trips::get).put(trips::update).delete(trips::delete),
        )
        .route(
            "/{id}/places",
            get(itinerary::list).post(itinerary::create),
        )
        .route(
            "/{id}/places/{item_id}",
            patch(itinerary::update).delete(itinerary::remove),
        )
}
