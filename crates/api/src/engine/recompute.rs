//! Score recalculation and standings rebuild.
//!
//! Composes the pure scoring and aggregation logic from `league_core` with
//! the transaction-scoped repository helpers. Every public function here
//! is one atomic unit (or, for batches, one unit per season): a failure
//! rolls back everything that unit wrote and leaves the last committed
//! scores and standings in place.
//!
//! Each unit starts by locking the season row, so a recalculation and the
//! rebuild computed from it cannot interleave with another run for the
//! same season.

use std::collections::BTreeMap;

use league_core::error::CoreError;
use league_core::scoring::compute_breakdown;
use league_core::standings::{aggregate_best_n, ScoreEntry};
use league_core::types::DbId;
use league_db::models::season::Season;
use league_db::repositories::{MatchdayRepo, MatchdayScoreRepo, SeasonRepo, StandingRepo};
use serde::Serialize;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of recalculating one matchday.
#[derive(Debug, Clone, Serialize)]
pub struct RecalculateSummary {
    pub matchday_id: DbId,
    pub season_id: DbId,
    pub scores_updated: usize,
}

/// Outcome of rebuilding one season's standings.
#[derive(Debug, Clone, Serialize)]
pub struct RebuildSummary {
    pub season_id: DbId,
    pub standings_removed: u64,
    pub standings_written: u64,
}

/// Outcome of recalculating a set of matchdays and rebuilding their season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonRecalculation {
    pub season_id: DbId,
    pub matchday_ids: Vec<DbId>,
    pub scores_updated: usize,
    pub standings_written: u64,
}

/// Which batch trigger is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchAction {
    /// Mark the matchdays closed, then recalculate and rebuild.
    CloseAndRebuild,
    /// Recalculate and rebuild without touching the closed flag.
    Recalculate,
}

/// Per-season result of a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonOutcome {
    Rebuilt(SeasonRecalculation),
    Failed {
        season_id: DbId,
        matchday_ids: Vec<DbId>,
        error: String,
    },
}

/// Result of a batch trigger, one entry per distinct season touched.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub action: BatchAction,
    pub seasons: Vec<SeasonOutcome>,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.seasons
            .iter()
            .filter(|s| matches!(s, SeasonOutcome::Failed { .. }))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Single-unit operations
// ---------------------------------------------------------------------------

/// Recompute the derived points of every score on one matchday.
///
/// Reads the owning season's rules at call time. The closed flag is not
/// consulted.
pub async fn recalculate_matchday(
    pool: &PgPool,
    matchday_id: DbId,
) -> AppResult<RecalculateSummary> {
    let matchday = MatchdayRepo::find_by_id(pool, matchday_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Matchday",
            id: matchday_id,
        }))?;

    let mut tx = pool.begin().await?;
    let season = lock_season(&mut tx, matchday.season_id).await?;
    let scores_updated = recalculate_in_tx(&mut tx, &season, matchday_id).await?;
    tx.commit().await?;

    tracing::info!(
        matchday_id,
        season_id = season.id,
        scores_updated,
        "Matchday scores recalculated"
    );

    Ok(RecalculateSummary {
        matchday_id,
        season_id: season.id,
        scores_updated,
    })
}

/// Replace a season's standings with the best-N sums of its current
/// matchday totals.
pub async fn rebuild_season(pool: &PgPool, season_id: DbId) -> AppResult<RebuildSummary> {
    let mut tx = pool.begin().await?;
    let season = lock_season(&mut tx, season_id).await?;
    let summary = rebuild_in_tx(&mut tx, &season).await?;
    tx.commit().await?;

    tracing::info!(
        season_id,
        removed = summary.standings_removed,
        written = summary.standings_written,
        "Season standings rebuilt"
    );

    Ok(summary)
}

/// Recalculate every matchday of a season, then rebuild its standings.
///
/// Used after the season's point rules change.
pub async fn recalculate_season(pool: &PgPool, season_id: DbId) -> AppResult<SeasonRecalculation> {
    let mut tx = pool.begin().await?;
    let season = lock_season(&mut tx, season_id).await?;

    let matchday_ids: Vec<DbId> = MatchdayRepo::list_by_season_in_tx(&mut tx, season_id)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();

    let result = recalculate_and_rebuild_in_tx(&mut tx, &season, matchday_ids).await?;
    tx.commit().await?;

    tracing::info!(
        season_id,
        matchdays = result.matchday_ids.len(),
        scores_updated = result.scores_updated,
        standings_written = result.standings_written,
        "Season recalculated"
    );

    Ok(result)
}

// ---------------------------------------------------------------------------
// Batch triggers
// ---------------------------------------------------------------------------

/// Run a close-and-rebuild or recalculate trigger over a set of matchdays.
///
/// All ids are resolved before anything is written; an unknown id fails
/// the whole call with 404. Matchdays are then grouped by season and each
/// season runs as its own transaction: closed flags (if closing), every
/// selected matchday's recalculation, then exactly one standings rebuild.
/// A season that fails is reported and rolled back without affecting the
/// others.
pub async fn run_batch(
    pool: &PgPool,
    matchday_ids: &[DbId],
    action: BatchAction,
) -> AppResult<BatchReport> {
    let by_season = resolve_selection(pool, matchday_ids).await?;
    let mut seasons = Vec::with_capacity(by_season.len());

    for (season_id, ids) in by_season {
        match run_season_unit(pool, season_id, &ids, action).await {
            Ok(done) => seasons.push(SeasonOutcome::Rebuilt(done)),
            Err(err) => {
                tracing::warn!(
                    season_id,
                    error = %err,
                    "Season recompute failed, previous state kept"
                );
                let (_, _, message) = err.classify();
                seasons.push(SeasonOutcome::Failed {
                    season_id,
                    matchday_ids: ids,
                    error: message,
                });
            }
        }
    }

    let report = BatchReport { action, seasons };
    tracing::info!(
        ?action,
        seasons = report.seasons.len(),
        failed = report.failed_count(),
        "Matchday batch completed"
    );
    Ok(report)
}

/// Clear the closed flag on a set of matchdays. No recalculation happens.
///
/// Returns the number of matchdays updated.
pub async fn reopen_matchdays(pool: &PgPool, matchday_ids: &[DbId]) -> AppResult<u64> {
    let by_season = resolve_selection(pool, matchday_ids).await?;
    let ids: Vec<DbId> = by_season.into_values().flatten().collect();

    let reopened = MatchdayRepo::set_closed(pool, &ids, false).await?;
    tracing::info!(reopened, "Matchdays reopened");
    Ok(reopened)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Validate a selection and group its ids by season.
///
/// Duplicate ids collapse to one. Seasons and ids come back in ascending
/// order so batch runs are reproducible.
async fn resolve_selection(
    pool: &PgPool,
    matchday_ids: &[DbId],
) -> AppResult<BTreeMap<DbId, Vec<DbId>>> {
    if matchday_ids.is_empty() {
        return Err(AppError::BadRequest(
            "matchday_ids must not be empty".to_string(),
        ));
    }

    let mut unique = matchday_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let found = MatchdayRepo::find_by_ids(pool, &unique).await?;
    if let Some(&missing) = unique
        .iter()
        .find(|id| !found.iter().any(|m| m.id == **id))
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Matchday",
            id: missing,
        }));
    }

    let mut by_season: BTreeMap<DbId, Vec<DbId>> = BTreeMap::new();
    for matchday in found {
        by_season.entry(matchday.season_id).or_default().push(matchday.id);
    }
    Ok(by_season)
}

async fn run_season_unit(
    pool: &PgPool,
    season_id: DbId,
    matchday_ids: &[DbId],
    action: BatchAction,
) -> AppResult<SeasonRecalculation> {
    let mut tx = pool.begin().await?;
    let season = lock_season(&mut tx, season_id).await?;

    if action == BatchAction::CloseAndRebuild {
        MatchdayRepo::set_closed(&mut *tx, matchday_ids, true).await?;
    }

    let result = recalculate_and_rebuild_in_tx(&mut tx, &season, matchday_ids.to_vec()).await?;
    tx.commit().await?;
    Ok(result)
}

async fn lock_season(tx: &mut Transaction<'_, Postgres>, season_id: DbId) -> AppResult<Season> {
    SeasonRepo::lock_for_update_in_tx(tx, season_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Season",
            id: season_id,
        }))
}

async fn recalculate_and_rebuild_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    season: &Season,
    matchday_ids: Vec<DbId>,
) -> AppResult<SeasonRecalculation> {
    let mut scores_updated = 0;
    for &matchday_id in &matchday_ids {
        scores_updated += recalculate_in_tx(tx, season, matchday_id).await?;
    }
    let rebuild = rebuild_in_tx(tx, season).await?;

    Ok(SeasonRecalculation {
        season_id: season.id,
        matchday_ids,
        scores_updated,
        standings_written: rebuild.standings_written,
    })
}

/// Overwrite the derived fields of every score row on the matchday.
async fn recalculate_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    season: &Season,
    matchday_id: DbId,
) -> AppResult<usize> {
    let rules = season.point_rules();
    let rows = MatchdayScoreRepo::list_for_matchday_in_tx(tx, matchday_id).await?;

    for row in &rows {
        let breakdown = compute_breakdown(&rules, &row.score_line()).map_err(|err| match err {
            CoreError::Validation(msg) => {
                CoreError::Validation(format!("Matchday score {}: {msg}", row.id))
            }
            other => other,
        })?;
        MatchdayScoreRepo::set_breakdown_in_tx(tx, row.id, &breakdown).await?;
    }

    tracing::debug!(matchday_id, rows = rows.len(), "Recalculated matchday rows");
    Ok(rows.len())
}

/// Delete and regenerate all standings for the season.
async fn rebuild_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    season: &Season,
) -> AppResult<RebuildSummary> {
    let entries: Vec<ScoreEntry> = MatchdayScoreRepo::list_season_totals_in_tx(tx, season.id)
        .await?
        .into_iter()
        .map(ScoreEntry::from)
        .collect();

    let totals = aggregate_best_n(season.top_matchdays_limit, &entries)?;
    let (standings_removed, standings_written) =
        StandingRepo::replace_for_season_in_tx(tx, season.id, &totals).await?;

    Ok(RebuildSummary {
        season_id: season.id,
        standings_removed,
        standings_written,
    })
}
