//! Route definitions for the administrative matchday actions.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/matchdays`.
///
/// ```text
/// POST   /close          -> close
/// POST   /reopen         -> reopen
/// POST   /recalculate    -> recalculate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/close", post(admin::close))
        .route("/reopen", post(admin::reopen))
        .route("/recalculate", post(admin::recalculate))
}
