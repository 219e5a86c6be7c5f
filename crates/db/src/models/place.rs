//! Place models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triplan_core::types::DbId;

/// A row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub city: String,
    pub name: String,
    pub category: String,
}

/// DTO for creating a place. All fields are required and non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub city: String,
    pub name: String,
    pub category: String,
}

/// DTO for partially updating a place. Omitted fields keep their stored
/// values; none of the columns are nullable, so a plain `Option` suffices.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlace {
    pub city: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Query parameters for `GET /places`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceListParams {
    /// Exact-match filter on city.
    pub city: Option<String>,
    /// Exact-match filter on category.
    pub category: Option<String>,
}
