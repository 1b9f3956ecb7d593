//! Repository for the `matchdays` table.

use league_core::types::DbId;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::models::matchday::{CreateMatchday, Matchday, UpdateMatchday};

const COLUMNS: &str = "id, season_id, number, match_date, is_closed, created_at, updated_at";

/// Provides CRUD operations for matchdays plus the close/reopen flag.
pub struct MatchdayRepo;

impl MatchdayRepo {
    /// Insert a new open matchday. Fails with `uq_matchdays_season_number`
    /// if the number is already used in the season.
    pub async fn create(
        pool: &PgPool,
        season_id: DbId,
        input: &CreateMatchday,
    ) -> Result<Matchday, sqlx::Error> {
        let query = format!(
            "INSERT INTO matchdays (season_id, number, match_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Matchday>(&query)
            .bind(season_id)
            .bind(input.number)
            .bind(input.match_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Matchday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchdays WHERE id = $1");
        sqlx::query_as::<_, Matchday>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a matchday only if it belongs to the given season.
    pub async fn find_in_season(
        pool: &PgPool,
        season_id: DbId,
        id: DbId,
    ) -> Result<Option<Matchday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchdays WHERE id = $1 AND season_id = $2");
        sqlx::query_as::<_, Matchday>(&query)
            .bind(id)
            .bind(season_id)
            .fetch_optional(pool)
            .await
    }

    /// Load every matchday whose id is in `ids`. Missing ids are simply
    /// absent from the result.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Matchday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchdays WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Matchday>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List a season's matchdays in sequence order.
    pub async fn list_by_season(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<Matchday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchdays WHERE season_id = $1 ORDER BY number");
        sqlx::query_as::<_, Matchday>(&query)
            .bind(season_id)
            .fetch_all(pool)
            .await
    }

    /// List a season's matchdays inside an open transaction.
    pub async fn list_by_season_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        season_id: DbId,
    ) -> Result<Vec<Matchday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchdays WHERE season_id = $1 ORDER BY number");
        sqlx::query_as::<_, Matchday>(&query)
            .bind(season_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Update a matchday's number or date.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMatchday,
    ) -> Result<Option<Matchday>, sqlx::Error> {
        let query = format!(
            "UPDATE matchdays SET
                number = COALESCE($2, number),
                match_date = COALESCE($3, match_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Matchday>(&query)
            .bind(id)
            .bind(input.number)
            .bind(input.match_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a matchday and its scores.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matchdays WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set or clear the closed flag on every matchday in `ids`.
    ///
    /// Accepts a pool or a transaction. Returns the number of rows changed.
    pub async fn set_closed<'e, E>(executor: E, ids: &[DbId], closed: bool) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE matchdays SET is_closed = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(closed)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
