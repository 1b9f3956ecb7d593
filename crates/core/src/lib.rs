//! League domain logic.
//!
//! Scoring rules, best-N standings aggregation and the validation helpers
//! shared by the persistence and HTTP layers. This crate has no database
//! dependency; callers load rows and pass them in.

pub mod error;
pub mod match_result;
pub mod scoring;
pub mod season;
pub mod standings;
pub mod types;
