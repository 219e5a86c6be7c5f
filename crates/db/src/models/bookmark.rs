//! Bookmark models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triplan_core::types::{DbId, Timestamp};

/// A row from the `bookmarks` table. Unique per (place_id, user_name).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bookmark {
    pub id: DbId,
    pub place_id: DbId,
    pub user_name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a bookmark. The place id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookmark {
    pub user_name: String,
}

/// Query parameters for `DELETE /places/{id}/bookmark`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveBookmarkParams {
    pub user_name: String,
}
