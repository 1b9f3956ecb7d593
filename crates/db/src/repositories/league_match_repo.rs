//! Repository for the `matches` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::league_match::{CreateLeagueMatch, LeagueMatch};

const COLUMNS: &str = "id, matchday_id, player_a_id, player_b_id, result, created_at, updated_at";

/// Provides CRUD operations for recorded head-to-head matches.
pub struct LeagueMatchRepo;

impl LeagueMatchRepo {
    pub async fn create(
        pool: &PgPool,
        matchday_id: DbId,
        input: &CreateLeagueMatch,
    ) -> Result<LeagueMatch, sqlx::Error> {
        let query = format!(
            "INSERT INTO matches (matchday_id, player_a_id, player_b_id, result)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeagueMatch>(&query)
            .bind(matchday_id)
            .bind(input.player_a_id)
            .bind(input.player_b_id)
            .bind(input.result.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LeagueMatch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matches WHERE id = $1");
        sqlx::query_as::<_, LeagueMatch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the matches recorded on a matchday in insertion order.
    pub async fn list_by_matchday(
        pool: &PgPool,
        matchday_id: DbId,
    ) -> Result<Vec<LeagueMatch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matches WHERE matchday_id = $1 ORDER BY id");
        sqlx::query_as::<_, LeagueMatch>(&query)
            .bind(matchday_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
