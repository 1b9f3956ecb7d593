//! Handlers for players.
//!
//! Players are created under their season
//! (`/seasons/{id}/players`) and addressed directly afterwards
//! (`/players/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use league_core::error::CoreError;
use league_core::season::validate_non_blank;
use league_core::types::DbId;
use league_db::models::player::{CreatePlayer, Player, UpdatePlayer};
use league_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::season::find_season;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/seasons/{id}/players
pub async fn list_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Player>>>> {
    find_season(&state.pool, season_id).await?;
    let players = PlayerRepo::list_by_season(&state.pool, season_id).await?;
    Ok(Json(DataResponse { data: players }))
}

/// POST /api/v1/seasons/{id}/players
pub async fn create(
    State(state): State<AppState>,
    Path(season_id): Path<DbId>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<impl IntoResponse> {
    validate_non_blank("display_name", &input.display_name)?;
    find_season(&state.pool, season_id).await?;

    let player = PlayerRepo::create(&state.pool, season_id, &input).await?;
    tracing::info!(player_id = player.id, season_id, "Player created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Player>>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id,
        }))?;
    Ok(Json(DataResponse { data: player }))
}

/// PUT /api/v1/players/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<Json<DataResponse<Player>>> {
    if let Some(name) = &input.display_name {
        validate_non_blank("display_name", name)?;
    }

    let player = PlayerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id,
        }))?;
    Ok(Json(DataResponse { data: player }))
}

/// DELETE /api/v1/players/{id}
///
/// Removes the player's scores and standing with them. Remaining
/// standings are not rebuilt automatically.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PlayerRepo::delete(&state.pool, id).await? {
        tracing::info!(player_id = id, "Player deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id,
        }))
    }
}
