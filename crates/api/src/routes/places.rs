//! Route definitions for places and their nested bookmark/review resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bookmarks, places, reviews};
use crate::state::AppState;

/// Place routes mounted at `/places`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete (cascades to dependents)
/// POST   /{id}/bookmark       -> bookmarks::create
/// DELETE /{id}/bookmark       -> bookmarks::remove (?user_name=)
/// GET    /{id}/reviews        -> reviews::list
/// POST   /{id}/reviews        -> reviews::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(places::list).post(places::create))
        .route(
            "/{id}",
            get(places::get)
                .put(places::update)
                .delete(places::delete),
        )
        .route(
            "/{id}/bookmark",
            post(bookmarks::create).delete(bookmarks::remove),
        )
        .route("/{id}/reviews", get(reviews::list).post(reviews::create))
}
