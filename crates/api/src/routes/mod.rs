pub mod admin;
pub mod health;
pub mod league_match;
pub mod matchday;
pub mod player;
pub mod score;
pub mod season;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /seasons                                             list, create
/// /seasons/active                                      active season (GET)
/// /seasons/{id}                                        get, update, delete
/// /seasons/{id}/standings                              standings table (GET)
/// /seasons/{id}/rebuild                                rebuild standings (POST)
/// /seasons/{id}/recalculate                            recalculate all matchdays (POST)
/// /seasons/{id}/players                                list, create
/// /seasons/{id}/matchdays                              list, create
/// /seasons/{id}/matchdays/{matchday_id}                get
/// /seasons/{id}/matchdays/{matchday_id}/scores         matchday table (GET)
///
/// /players/{id}                                        get, update, delete
///
/// /matchdays/{id}                                      update, delete
/// /matchdays/{id}/scores                               enter score (POST)
/// /matchdays/{id}/matches                              list, create
///
/// /scores/{id}                                         update, delete
///
/// /matches/{id}                                        get, delete
///
/// /admin/matchdays/close                               close + recompute (POST)
/// /admin/matchdays/reopen                              reopen (POST)
/// /admin/matchdays/recalculate                         recompute (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Seasons, with nested players, matchdays and standings.
        .nest("/seasons", season::router())
        .nest("/players", player::router())
        .nest("/matchdays", matchday::router())
        .nest("/scores", score::router())
        .nest("/matches", league_match::router())
        // Batch recompute triggers.
        .nest("/admin/matchdays", admin::router())
}
