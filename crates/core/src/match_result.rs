//! Head-to-head match results.
//!
//! Matches are recorded for reference only; standings are computed from the
//! manually entered matchday tallies, never from these rows.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const RESULT_A_WIN: &str = "a_win";
pub const RESULT_DRAW: &str = "draw";
pub const RESULT_B_WIN: &str = "b_win";

/// All valid result strings, as stored in `matches.result`.
pub const VALID_RESULTS: &[&str] = &[RESULT_A_WIN, RESULT_DRAW, RESULT_B_WIN];

/// Outcome of a match between player A and player B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    AWin,
    Draw,
    BWin,
}

impl MatchResult {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            RESULT_A_WIN => Ok(Self::AWin),
            RESULT_DRAW => Ok(Self::Draw),
            RESULT_B_WIN => Ok(Self::BWin),
            _ => Err(CoreError::Validation(format!(
                "Invalid match result '{s}'. Must be one of: {}",
                VALID_RESULTS.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AWin => RESULT_A_WIN,
            Self::Draw => RESULT_DRAW,
            Self::BWin => RESULT_B_WIN,
        }
    }
}

/// A player cannot be paired against themself.
pub fn validate_pairing(player_a_id: DbId, player_b_id: DbId) -> Result<(), CoreError> {
    if player_a_id == player_b_id {
        return Err(CoreError::Validation(format!(
            "player_a_id and player_b_id must differ, both are {player_a_id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_round_trip() {
        for s in VALID_RESULTS {
            assert_eq!(MatchResult::from_str_value(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn unknown_result_is_rejected() {
        assert!(MatchResult::from_str_value("forfeit").is_err());
    }

    #[test]
    fn self_pairing_is_rejected() {
        assert!(validate_pairing(4, 4).is_err());
        assert!(validate_pairing(4, 5).is_ok());
    }
}
