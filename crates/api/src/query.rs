//! Shared request body types for API handlers.

use league_core::types::DbId;
use serde::Deserialize;

/// Body of the batch matchday actions (`{"matchday_ids": [..]}`).
///
/// Used by close, reopen and recalculate.
#[derive(Debug, Deserialize)]
pub struct MatchdaySelection {
    pub matchday_ids: Vec<DbId>,
}
