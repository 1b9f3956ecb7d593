//! Head-to-head match model and DTOs.

use league_core::match_result::MatchResult;
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `matches` table. `result` is one of `a_win`, `draw`,
/// `b_win`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeagueMatch {
    pub id: DbId,
    pub matchday_id: DbId,
    pub player_a_id: DbId,
    pub player_b_id: DbId,
    pub result: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a match. `matchday_id` comes from the route path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeagueMatch {
    pub player_a_id: DbId,
    pub player_b_id: DbId,
    pub result: MatchResult,
}
