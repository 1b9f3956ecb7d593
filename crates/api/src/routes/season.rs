//! Route definitions for the `/seasons` resource.
//!
//! Also nests the season-scoped player and matchday routes. Every route
//! here names the season parameter `{id}` so the nested paths share one
//! parameter name at that segment.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{matchday, player, season};
use crate::state::AppState;

/// Routes mounted at `/seasons`.
///
/// ```text
/// GET    /                                        -> list
/// POST   /                                        -> create
/// GET    /active                                  -> get_active
/// GET    /{id}                                    -> get_by_id
/// PUT    /{id}                                    -> update
/// DELETE /{id}                                    -> delete
/// GET    /{id}/standings                          -> list_standings
/// POST   /{id}/rebuild                            -> rebuild
/// POST   /{id}/recalculate                        -> recalculate
///
/// GET    /{id}/players                            -> player::list_by_season
/// POST   /{id}/players                            -> player::create
///
/// GET    /{id}/matchdays                          -> matchday::list_by_season
/// POST   /{id}/matchdays                          -> matchday::create
/// GET    /{id}/matchdays/{matchday_id}            -> matchday::get_in_season
/// GET    /{id}/matchdays/{matchday_id}/scores     -> matchday::list_scores
/// ```
pub fn router() -> Router<AppState> {
    let player_routes =
        Router::new().route("/", get(player::list_by_season).post(player::create));

    let matchday_routes = Router::new()
        .route("/", get(matchday::list_by_season).post(matchday::create))
        .route("/{matchday_id}", get(matchday::get_in_season))
        .route("/{matchday_id}/scores", get(matchday::list_scores));

    Router::new()
        .route("/", get(season::list).post(season::create))
        .route("/active", get(season::get_active))
        .route(
            "/{id}",
            get(season::get_by_id)
                .put(season::update)
                .delete(season::delete),
        )
        .route("/{id}/standings", get(season::list_standings))
        .route("/{id}/rebuild", post(season::rebuild))
        .route("/{id}/recalculate", post(season::recalculate))
        .nest("/{id}/players", player_routes)
        .nest("/{id}/matchdays", matchday_routes)
}
