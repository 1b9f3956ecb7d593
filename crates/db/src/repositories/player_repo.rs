//! Repository for the `players` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::player::{CreatePlayer, Player, UpdatePlayer};

const COLUMNS: &str = "id, season_id, display_name, active, created_at, updated_at";

/// Provides CRUD operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player into a season.
    pub async fn create(
        pool: &PgPool,
        season_id: DbId,
        input: &CreatePlayer,
    ) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (season_id, display_name, active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(season_id)
            .bind(&input.display_name)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a season's players ordered by display name.
    pub async fn list_by_season(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players WHERE season_id = $1 ORDER BY display_name, id"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(season_id)
            .fetch_all(pool)
            .await
    }

    /// Update a player. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlayer,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                display_name = COALESCE($2, display_name),
                active = COALESCE($3, active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(&input.display_name)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a player along with their scores and standing.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
