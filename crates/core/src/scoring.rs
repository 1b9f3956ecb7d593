//! Matchday scoring rules.
//!
//! Converts a player's manually entered win/draw/loss tallies for one
//! matchday into base points, the undefeated bonus and the matchday total,
//! using the point values configured on the owning season.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Point values configured per season.
///
/// Any value may be zero or negative; only the tallies they multiply are
/// required to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRules {
    pub win: i32,
    pub draw: i32,
    pub loss: i32,
    pub bonus_undefeated: i32,
}

impl Default for PointRules {
    fn default() -> Self {
        Self {
            win: 2,
            draw: 1,
            loss: 0,
            bonus_undefeated: 1,
        }
    }
}

/// Manually entered results for one player on one matchday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
}

impl ScoreLine {
    pub fn new(wins: i32, draws: i32, losses: i32) -> Self {
        Self {
            wins,
            draws,
            losses,
        }
    }

    /// Number of games played. Saturates instead of overflowing.
    pub fn played(&self) -> i32 {
        self.wins
            .saturating_add(self.draws)
            .saturating_add(self.losses)
    }
}

/// Derived point fields of a matchday score row.
///
/// `total_points == points_base + bonus` always holds for values produced
/// by [`compute_breakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub points_base: i32,
    pub bonus: i32,
    pub total_points: i32,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject negative tallies.
pub fn validate_score_line(line: &ScoreLine) -> Result<(), CoreError> {
    for (name, value) in [
        ("wins", line.wins),
        ("draws", line.draws),
        ("losses", line.losses),
    ] {
        if value < 0 {
            return Err(CoreError::Validation(format!(
                "{name} must not be negative, got {value}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the derived point fields for one score line.
///
/// The bonus is awarded only when at least one game was played and none
/// were lost. Fails with [`CoreError::Validation`] on negative tallies or
/// when the result does not fit the stored integer width.
pub fn compute_breakdown(
    rules: &PointRules,
    line: &ScoreLine,
) -> Result<ScoreBreakdown, CoreError> {
    validate_score_line(line)?;

    let overflow = || {
        CoreError::Validation(format!(
            "Points overflow for wins={}, draws={}, losses={}",
            line.wins, line.draws, line.losses
        ))
    };

    let points_base = line
        .wins
        .checked_mul(rules.win)
        .and_then(|w| line.draws.checked_mul(rules.draw).and_then(|d| w.checked_add(d)))
        .and_then(|wd| line.losses.checked_mul(rules.loss).and_then(|l| wd.checked_add(l)))
        .ok_or_else(overflow)?;

    let bonus = if line.played() > 0 && line.losses == 0 {
        rules.bonus_undefeated
    } else {
        0
    };

    let total_points = points_base.checked_add(bonus).ok_or_else(overflow)?;

    Ok(ScoreBreakdown {
        points_base,
        bonus,
        total_points,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
