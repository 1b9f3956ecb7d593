//! Repository for the derived `standings` table.

use league_core::standings::PlayerTotal;
use league_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::standing::{Standing, StandingWithPlayer};

const COLUMNS: &str = "id, season_id, player_id, total_points, matchdays_counted, created_at";

/// Read access to standings plus the wholesale replace used by rebuilds.
pub struct StandingRepo;

impl StandingRepo {
    /// List a season's standings, highest total first, ties by player name.
    pub async fn list_by_season(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<StandingWithPlayer>, sqlx::Error> {
        sqlx::query_as::<_, StandingWithPlayer>(
            "SELECT st.id, st.season_id, st.player_id, p.display_name, \
                    st.total_points, st.matchdays_counted \
             FROM standings st \
             JOIN players p ON p.id = st.player_id \
             WHERE st.season_id = $1 \
             ORDER BY st.total_points DESC, p.display_name ASC, st.player_id ASC",
        )
        .bind(season_id)
        .fetch_all(pool)
        .await
    }

    /// Raw standing rows for a season ordered by player id.
    pub async fn list_raw_by_season(
        pool: &PgPool,
        season_id: DbId,
    ) -> Result<Vec<Standing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM standings WHERE season_id = $1 ORDER BY player_id");
        sqlx::query_as::<_, Standing>(&query)
            .bind(season_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every standing of the season and insert `totals` in their
    /// place. Returns `(deleted, inserted)`.
    ///
    /// Nothing is visible to other sessions until the caller commits.
    pub async fn replace_for_season_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        season_id: DbId,
        totals: &[PlayerTotal],
    ) -> Result<(u64, u64), sqlx::Error> {
        let deleted = sqlx::query("DELETE FROM standings WHERE season_id = $1")
            .bind(season_id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        let mut inserted = 0;
        for total in totals {
            inserted += sqlx::query(
                "INSERT INTO standings (season_id, player_id, total_points, matchdays_counted) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(season_id)
            .bind(total.player_id)
            .bind(total.total_points)
            .bind(total.matchdays_counted())
            .execute(&mut **tx)
            .await?
            .rows_affected();
        }

        tracing::debug!(season_id, deleted, inserted, "Replaced season standings");

        Ok((deleted, inserted))
    }
}
