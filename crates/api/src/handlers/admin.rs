//! Administrative matchday actions.
//!
//! Each action takes `{"matchday_ids": [..]}`. Close and recalculate run
//! the recompute engine once per distinct season touched; reopen only
//! clears the closed flag.

use axum::extract::State;
use axum::Json;

use crate::engine::recompute::{self, BatchAction, BatchReport};
use crate::error::AppResult;
use crate::query::MatchdaySelection;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Serialize)]
pub struct ReopenResponse {
    pub reopened: u64,
}

/// POST /api/v1/admin/matchdays/close
///
/// Close the selected matchdays, recalculate their points and rebuild
/// standings for each season touched.
pub async fn close(
    State(state): State<AppState>,
    Json(body): Json<MatchdaySelection>,
) -> AppResult<Json<DataResponse<BatchReport>>> {
    let report =
        recompute::run_batch(&state.pool, &body.matchday_ids, BatchAction::CloseAndRebuild)
            .await?;
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/admin/matchdays/reopen
pub async fn reopen(
    State(state): State<AppState>,
    Json(body): Json<MatchdaySelection>,
) -> AppResult<Json<DataResponse<ReopenResponse>>> {
    let reopened = recompute::reopen_matchdays(&state.pool, &body.matchday_ids).await?;
    Ok(Json(DataResponse {
        data: ReopenResponse { reopened },
    }))
}

/// POST /api/v1/admin/matchdays/recalculate
///
/// Recalculate the selected matchdays and rebuild standings, leaving the
/// closed flags as they are.
pub async fn recalculate(
    State(state): State<AppState>,
    Json(body): Json<MatchdaySelection>,
) -> AppResult<Json<DataResponse<BatchReport>>> {
    let report =
        recompute::run_batch(&state.pool, &body.matchday_ids, BatchAction::Recalculate).await?;
    Ok(Json(DataResponse { data: report }))
}
