//! Season entity model and DTOs.

use league_core::scoring::PointRules;
use league_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A season row from the `seasons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Season {
    pub id: DbId,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: bool,
    pub points_win: i32,
    pub points_draw: i32,
    pub points_loss: i32,
    pub bonus_undefeated: i32,
    pub top_matchdays_limit: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Season {
    /// The scoring rules currently configured on this season.
    pub fn point_rules(&self) -> PointRules {
        PointRules {
            win: self.points_win,
            draw: self.points_draw,
            loss: self.points_loss,
            bonus_undefeated: self.bonus_undefeated,
        }
    }
}

/// DTO for creating a new season.
///
/// Omitted rule fields take the column defaults (2/1/0, bonus 1, best 8).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeason {
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub is_active: Option<bool>,
    pub points_win: Option<i32>,
    pub points_draw: Option<i32>,
    pub points_loss: Option<i32>,
    pub bonus_undefeated: Option<i32>,
    pub top_matchdays_limit: Option<i32>,
}

/// DTO for updating an existing season. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeason {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_active: Option<bool>,
    pub points_win: Option<i32>,
    pub points_draw: Option<i32>,
    pub points_loss: Option<i32>,
    pub bonus_undefeated: Option<i32>,
    pub top_matchdays_limit: Option<i32>,
}
