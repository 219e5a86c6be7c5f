pub mod health;
pub mod places;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// ```text
/// /places                              list, create
/// /places/{id}                         get, update, delete (cascades)
/// /places/{id}/bookmark                create, remove (?user_name=)
/// /places/{id}/reviews                 list, create
///
/// /trips                               list, create
/// /trips/{id}                          get, update, delete (cascades)
/// /trips/{id}/places                   list (sorted), create
/// /trips/{id}/places/{item_id}         update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/places", places::router())
        .nest("/trips", trips::router())
}
