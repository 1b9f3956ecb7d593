//! Repository for the `seasons` table.

use league_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::season::{CreateSeason, Season, UpdateSeason};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, start_date, end_date, is_active, \
    points_win, points_draw, points_loss, bonus_undefeated, top_matchdays_limit, \
    created_at, updated_at";

/// Provides CRUD operations for seasons.
pub struct SeasonRepo;

impl SeasonRepo {
    /// Insert a new season, returning the created row.
    ///
    /// Rule fields left as `None` fall back to the column defaults.
    pub async fn create(pool: &PgPool, input: &CreateSeason) -> Result<Season, sqlx::Error> {
        let query = format!(
            "INSERT INTO seasons
                (name, start_date, end_date, is_active, points_win, points_draw,
                 points_loss, bonus_undefeated, top_matchdays_limit)
             VALUES ($1, $2, $3, COALESCE($4, true), COALESCE($5, 2), COALESCE($6, 1),
                     COALESCE($7, 0), COALESCE($8, 1), COALESCE($9, 8))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Season>(&query)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .bind(input.points_win)
            .bind(input.points_draw)
            .bind(input.points_loss)
            .bind(input.bonus_undefeated)
            .bind(input.top_matchdays_limit)
            .fetch_one(pool)
            .await
    }

    /// Find a season by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Season>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE id = $1");
        sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all seasons, most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Season>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seasons ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Season>(&query).fetch_all(pool).await
    }

    /// The active season with the most recent start date, if any.
    pub async fn find_active(pool: &PgPool) -> Result<Option<Season>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM seasons WHERE is_active = true \
             ORDER BY start_date DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Season>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update a season. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Changing point
    /// values does not touch stored scores until the next recompute.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeason,
    ) -> Result<Option<Season>, sqlx::Error> {
        let query = format!(
            "UPDATE seasons SET
                name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                is_active = COALESCE($5, is_active),
                points_win = COALESCE($6, points_win),
                points_draw = COALESCE($7, points_draw),
                points_loss = COALESCE($8, points_loss),
                bonus_undefeated = COALESCE($9, bonus_undefeated),
                top_matchdays_limit = COALESCE($10, top_matchdays_limit)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .bind(input.points_win)
            .bind(input.points_draw)
            .bind(input.points_loss)
            .bind(input.bonus_undefeated)
            .bind(input.top_matchdays_limit)
            .fetch_optional(pool)
            .await
    }

    /// Delete a season and, by cascade, everything it owns.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a season and hold a row lock on it until the transaction ends.
    ///
    /// Recompute and rebuild take this lock first so two runs for the same
    /// season cannot interleave.
    pub async fn lock_for_update_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<Option<Season>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seasons WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Season>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }
}
