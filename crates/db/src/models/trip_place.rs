//! Itinerary item (trip/place association) models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triplan_core::types::DbId;

/// A row from the `trip_places` junction table: one itinerary entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripPlace {
    pub id: DbId,
    pub trip_id: DbId,
    pub place_id: DbId,
    /// 1-based day within the trip, if scheduled.
    pub day: Option<i32>,
    /// 1-based position within the day, if ordered.
    pub planned_order: Option<i32>,
    pub note: Option<String>,
}

/// DTO for adding a place to a trip's itinerary. The trip id comes from the
/// request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripPlace {
    pub place_id: DbId,
    pub day: Option<i32>,
    pub planned_order: Option<i32>,
    pub note: Option<String>,
}

/// DTO for partially updating an itinerary entry.
///
/// All three columns are nullable, so the double `Option` distinguishes an
/// omitted field (outer `None`: keep the stored value) from an explicit
/// `null` (inner `None`: clear the column).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTripPlace {
    #[serde(default, deserialize_with = "double_option")]
    pub day: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub planned_order: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
}

/// Deserialize a present field into `Some(inner)` so an explicit `null`
/// becomes `Some(None)` instead of collapsing into the outer `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
