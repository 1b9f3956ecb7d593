//! Route definitions for the `/matches` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::league_match;
use crate::state::AppState;

/// Routes mounted at `/matches`.
///
/// ```text
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(league_match::get_by_id).delete(league_match::delete),
    )
}
