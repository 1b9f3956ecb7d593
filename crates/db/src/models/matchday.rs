//! Matchday entity model and DTOs.

use league_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A matchday row from the `matchdays` table.
///
/// `number` is unique within the season. `is_closed` gates manual score
/// edits at the API layer; the recompute engine ignores it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Matchday {
    pub id: DbId,
    pub season_id: DbId,
    pub number: i32,
    pub match_date: Date,
    pub is_closed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a matchday. `season_id` comes from the route path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchday {
    pub number: i32,
    pub match_date: Date,
}

/// DTO for updating a matchday. The closed flag is changed only through
/// the close/reopen actions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMatchday {
    pub number: Option<i32>,
    pub match_date: Option<Date>,
}
