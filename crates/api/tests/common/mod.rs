#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use league_db::models::matchday::{CreateMatchday, Matchday};
use league_db::models::matchday_score::{CreateMatchdayScore, MatchdayScore};
use league_db::models::player::{CreatePlayer, Player};
use league_db::models::season::{CreateSeason, Season};
use league_db::repositories::{MatchdayRepo, MatchdayScoreRepo, PlayerRepo, SeasonRepo};
use sqlx::PgPool;
use tower::ServiceExt;

use league_api::config::ServerConfig;
use league_api::router::build_app_router;
use league_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Season with W=2, D=1, L=0, bonus 1 and the given best-N limit.
pub async fn seed_season(pool: &PgPool, name: &str, top_matchdays_limit: i32) -> Season {
    SeasonRepo::create(
        pool,
        &CreateSeason {
            name: name.to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 6, 30),
            is_active: None,
            points_win: Some(2),
            points_draw: Some(1),
            points_loss: Some(0),
            bonus_undefeated: Some(1),
            top_matchdays_limit: Some(top_matchdays_limit),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_player(pool: &PgPool, season_id: i64, name: &str) -> Player {
    PlayerRepo::create(
        pool,
        season_id,
        &CreatePlayer {
            display_name: name.to_string(),
            active: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_matchday(pool: &PgPool, season_id: i64, number: i32) -> Matchday {
    MatchdayRepo::create(
        pool,
        season_id,
        &CreateMatchday {
            number,
            match_date: date(2025, 2, number.clamp(1, 28) as u32),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_score(
    pool: &PgPool,
    matchday_id: i64,
    player_id: i64,
    wins: i32,
    draws: i32,
    losses: i32,
) -> MatchdayScore {
    MatchdayScoreRepo::create(
        pool,
        matchday_id,
        &CreateMatchdayScore {
            player_id,
            wins,
            draws,
            losses,
        },
    )
    .await
    .unwrap()
}
