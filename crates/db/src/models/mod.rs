//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Derived tables (`standings`) have no DTOs; they are written only by the
//! recompute engine.

pub mod league_match;
pub mod matchday;
pub mod matchday_score;
pub mod player;
pub mod season;
pub mod standing;
