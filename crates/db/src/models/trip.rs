//! Trip models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triplan_core::types::DbId;

/// A row from the `trips` table. The date range is inclusive on both ends.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for creating a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrip {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for partially updating a trip. Omitted fields keep their stored
/// values; the date-ordering invariant is re-checked against the merged
/// result before anything is written.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrip {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
