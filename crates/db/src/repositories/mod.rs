//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods suffixed `_in_tx`
//! run inside a caller-owned transaction so the recompute engine can
//! compose them into one atomic unit.

pub mod league_match_repo;
pub mod matchday_repo;
pub mod matchday_score_repo;
pub mod player_repo;
pub mod season_repo;
pub mod standing_repo;

pub use league_match_repo::LeagueMatchRepo;
pub use matchday_repo::MatchdayRepo;
pub use matchday_score_repo::MatchdayScoreRepo;
pub use player_repo::PlayerRepo;
pub use season_repo::SeasonRepo;
pub use standing_repo::StandingRepo;
