//! Matchday score model and DTOs.

use league_core::scoring::ScoreLine;
use league_core::standings::ScoreEntry;
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `matchday_scores` table.
///
/// `wins`, `draws` and `losses` are entered by hand. `points_base`, `bonus`
/// and `total_points` are derived and only written by the recompute engine.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatchdayScore {
    pub id: DbId,
    pub matchday_id: DbId,
    pub player_id: DbId,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub points_base: i32,
    pub bonus: i32,
    pub total_points: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MatchdayScore {
    pub fn score_line(&self) -> ScoreLine {
        ScoreLine::new(self.wins, self.draws, self.losses)
    }
}

/// A score row joined with the player's display name, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MatchdayScoreWithPlayer {
    pub id: DbId,
    pub matchday_id: DbId,
    pub player_id: DbId,
    pub display_name: String,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub points_base: i32,
    pub bonus: i32,
    pub total_points: i32,
}

/// Minimal projection of a score row used by the standings rebuild.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SeasonScoreRow {
    pub player_id: DbId,
    pub matchday_id: DbId,
    pub total_points: i32,
}

impl From<SeasonScoreRow> for ScoreEntry {
    fn from(row: SeasonScoreRow) -> Self {
        ScoreEntry {
            player_id: row.player_id,
            matchday_id: row.matchday_id,
            total_points: row.total_points,
        }
    }
}

/// DTO for entering a player's results on a matchday.
///
/// `matchday_id` comes from the route path. Derived point fields are not
/// accepted from clients.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchdayScore {
    pub player_id: DbId,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub draws: i32,
    #[serde(default)]
    pub losses: i32,
}

impl CreateMatchdayScore {
    pub fn score_line(&self) -> ScoreLine {
        ScoreLine::new(self.wins, self.draws, self.losses)
    }
}

/// DTO for correcting a player's results. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMatchdayScore {
    pub wins: Option<i32>,
    pub draws: Option<i32>,
    pub losses: Option<i32>,
}
