//! Player entity model and DTOs.

use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A player row from the `players` table. Each player belongs to one season.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub season_id: DbId,
    pub display_name: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a player. `season_id` comes from the route path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub display_name: String,
    pub active: Option<bool>,
}

/// DTO for updating an existing player. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayer {
    pub display_name: Option<String>,
    pub active: Option<bool>,
}
