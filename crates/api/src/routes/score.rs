//! Route definitions for the `/scores` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::matchday_score;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(matchday_score::update).delete(matchday_score::delete),
    )
}
