//! Standing model.
//!
//! Standings are derived rows: one per (season, player) with at least one
//! matchday score, regenerated wholesale on every rebuild.

use league_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `standings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Standing {
    pub id: DbId,
    pub season_id: DbId,
    pub player_id: DbId,
    pub total_points: i32,
    pub matchdays_counted: i32,
    pub created_at: Timestamp,
}

/// A standing joined with the player's display name, for the table view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StandingWithPlayer {
    pub id: DbId,
    pub season_id: DbId,
    pub player_id: DbId,
    pub display_name: String,
    pub total_points: i32,
    pub matchdays_counted: i32,
}
