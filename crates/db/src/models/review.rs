//! Review models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triplan_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub place_id: DbId,
    pub user_name: String,
    /// Rating in `[1, 5]`, validated before insertion.
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a review. The place id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub user_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}
