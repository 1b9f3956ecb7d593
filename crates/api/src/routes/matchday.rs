//! Route definitions for the `/matchdays` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{league_match, matchday, matchday_score};
use crate::state::AppState;

/// Routes mounted at `/matchdays`.
///
/// ```text
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/scores               -> matchday_score::create
/// GET    /{id}/matches              -> league_match::list_by_matchday
/// POST   /{id}/matches              -> league_match::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(matchday::update).delete(matchday::delete))
        .route("/{id}/scores", post(matchday_score::create))
        .route(
            "/{id}/matches",
            get(league_match::list_by_matchday).post(league_match::create),
        )
}
