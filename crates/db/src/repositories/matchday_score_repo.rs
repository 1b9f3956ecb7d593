//! Repository for the `matchday_scores` table.

use league_core::scoring::ScoreBreakdown;
use league_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::matchday_score::{
    CreateMatchdayScore, MatchdayScore, MatchdayScoreWithPlayer, SeasonScoreRow,
    UpdateMatchdayScore,
};

const COLUMNS: &str = "id, matchday_id, player_id, wins, draws, losses, \
    points_base, bonus, total_points, created_at, updated_at";

/// Provides manual-entry CRUD for matchday scores and the derived-field
/// writes used by the recompute engine.
pub struct MatchdayScoreRepo;

impl MatchdayScoreRepo {
    /// Insert a player's tallies for a matchday. Derived fields start at
    /// zero until the matchday is recalculated.
    pub async fn create(
        pool: &PgPool,
        matchday_id: DbId,
        input: &CreateMatchdayScore,
    ) -> Result<MatchdayScore, sqlx::Error> {
        let query = format!(
            "INSERT INTO matchday_scores (matchday_id, player_id, wins, draws, losses)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MatchdayScore>(&query)
            .bind(matchday_id)
            .bind(input.player_id)
            .bind(input.wins)
            .bind(input.draws)
            .bind(input.losses)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MatchdayScore>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matchday_scores WHERE id = $1");
        sqlx::query_as::<_, MatchdayScore>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a matchday's scores, highest total first, ties by player name.
    pub async fn list_by_matchday(
        pool: &PgPool,
        matchday_id: DbId,
    ) -> Result<Vec<MatchdayScoreWithPlayer>, sqlx::Error> {
        sqlx::query_as::<_, MatchdayScoreWithPlayer>(
            "SELECT s.id, s.matchday_id, s.player_id, p.display_name, \
                    s.wins, s.draws, s.losses, s.points_base, s.bonus, s.total_points \
             FROM matchday_scores s \
             JOIN players p ON p.id = s.player_id \
             WHERE s.matchday_id = $1 \
             ORDER BY s.total_points DESC, p.display_name ASC, s.id ASC",
        )
        .bind(matchday_id)
        .fetch_all(pool)
        .await
    }

    /// Correct a player's tallies. Derived fields are left for the next
    /// recalculation.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMatchdayScore,
    ) -> Result<Option<MatchdayScore>, sqlx::Error> {
        let query = format!(
            "UPDATE matchday_scores SET
                wins = COALESCE($2, wins),
                draws = COALESCE($3, draws),
                losses = COALESCE($4, losses)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MatchdayScore>(&query)
            .bind(id)
            .bind(input.wins)
            .bind(input.draws)
            .bind(input.losses)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matchday_scores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Recompute helpers (transaction-scoped)
    // -----------------------------------------------------------------------

    /// Load every score row of a matchday, ordered by id.
    pub async fn list_for_matchday_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        matchday_id: DbId,
    ) -> Result<Vec<MatchdayScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matchday_scores WHERE matchday_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, MatchdayScore>(&query)
            .bind(matchday_id)
            .fetch_all(&mut **tx)
            .await
    }

    /// Overwrite the derived point fields of one row. Tallies are untouched.
    pub async fn set_breakdown_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        breakdown: &ScoreBreakdown,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE matchday_scores SET points_base = $2, bonus = $3, total_points = $4 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(breakdown.points_base)
        .bind(breakdown.bonus)
        .bind(breakdown.total_points)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Load the matchday totals of every score in a season, grouped by
    /// player, best total first, earlier matchday first on ties.
    pub async fn list_season_totals_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        season_id: DbId,
    ) -> Result<Vec<SeasonScoreRow>, sqlx::Error> {
        sqlx::query_as::<_, SeasonScoreRow>(
            "SELECT s.player_id, s.matchday_id, s.total_points \
             FROM matchday_scores s \
             JOIN matchdays m ON m.id = s.matchday_id \
             WHERE m.season_id = $1 \
             ORDER BY s.player_id, s.total_points DESC, s.matchday_id ASC",
        )
        .bind(season_id)
        .fetch_all(&mut **tx)
        .await
    }
}
