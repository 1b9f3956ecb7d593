//! Best-N season standings aggregation.
//!
//! A player's standing is the sum of their N highest matchday totals in a
//! season, where N is the season's `top_matchdays_limit`. Pure functions
//! only; the caller loads the season's score rows and persists the result.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// One matchday total for one player, as read from the score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player_id: DbId,
    pub matchday_id: DbId,
    pub total_points: i32,
}

/// Aggregated standing for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTotal {
    pub player_id: DbId,
    pub total_points: i32,
    /// Matchdays whose totals were summed, in selection order.
    pub counted_matchday_ids: Vec<DbId>,
}

impl PlayerTotal {
    pub fn matchdays_counted(&self) -> i32 {
        i32::try_from(self.counted_matchday_ids.len()).unwrap_or(i32::MAX)
    }
}

/// Validate a season's top-matchdays limit.
pub fn validate_top_matchdays_limit(limit: i32) -> Result<(), CoreError> {
    if limit < 0 {
        return Err(CoreError::Validation(format!(
            "top_matchdays_limit must be zero or greater, got {limit}"
        )));
    }
    Ok(())
}

/// Select and sum each player's best `limit` matchday totals.
///
/// Within a player, entries are ranked by `total_points` descending and
/// then by `matchday_id` ascending, so the earlier matchday wins a tie at
/// the cutoff. Every player with at least one entry gets exactly one
/// result, even when `limit` is zero. Results are ordered by player id.
pub fn aggregate_best_n(
    limit: i32,
    entries: &[ScoreEntry],
) -> Result<Vec<PlayerTotal>, CoreError> {
    validate_top_matchdays_limit(limit)?;
    let take = usize::try_from(limit).unwrap_or(0);

    let mut by_player: BTreeMap<DbId, Vec<&ScoreEntry>> = BTreeMap::new();
    for entry in entries {
        by_player.entry(entry.player_id).or_default().push(entry);
    }

    let mut totals = Vec::with_capacity(by_player.len());
    for (player_id, mut rows) in by_player {
        rows.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then(a.matchday_id.cmp(&b.matchday_id))
        });

        let mut total_points: i32 = 0;
        let mut counted_matchday_ids = Vec::with_capacity(take.min(rows.len()));
        for row in rows.into_iter().take(take) {
            total_points = total_points.checked_add(row.total_points).ok_or_else(|| {
                CoreError::Validation(format!("Standing total overflows for player {player_id}"))
            })?;
            counted_matchday_ids.push(row.matchday_id);
        }

        totals.push(PlayerTotal {
            player_id,
            total_points,
            counted_matchday_ids,
        });
    }

    Ok(totals)
}
