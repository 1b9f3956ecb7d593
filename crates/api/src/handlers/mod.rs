//! Axum handlers, one module per resource.

pub mod admin;
pub mod league_match;
pub mod matchday;
pub mod matchday_score;
pub mod player;
pub mod season;
