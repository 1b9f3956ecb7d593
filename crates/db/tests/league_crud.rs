//! Integration tests for the league repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create the season -> player / matchday -> score hierarchy
//! - Cascade delete behaviour
//! - Unique and check constraint violations
//! - Partial updates and listing order

use chrono::NaiveDate;
use league_core::match_result::MatchResult;
use league_db::models::league_match::CreateLeagueMatch;
use league_db::models::matchday::{CreateMatchday, UpdateMatchday};
use league_db::models::matchday_score::{CreateMatchdayScore, UpdateMatchdayScore};
use league_db::models::player::{CreatePlayer, UpdatePlayer};
use league_db::models::season::{CreateSeason, UpdateSeason};
use league_db::repositories::{
    LeagueMatchRepo, MatchdayRepo, MatchdayScoreRepo, PlayerRepo, SeasonRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_season(name: &str, start: NaiveDate) -> CreateSeason {
    CreateSeason {
        name: name.to_string(),
        start_date: start,
        end_date: start + chrono::Days::new(90),
        is_active: None,
        points_win: None,
        points_draw: None,
        points_loss: None,
        bonus_undefeated: None,
        top_matchdays_limit: None,
    }
}

fn new_player(name: &str) -> CreatePlayer {
    CreatePlayer {
        display_name: name.to_string(),
        active: None,
    }
}

fn new_matchday(number: i32) -> CreateMatchday {
    CreateMatchday {
        number,
        match_date: date(2025, 2, 1),
    }
}

fn new_score(player_id: i64, wins: i32, draws: i32, losses: i32) -> CreateMatchdayScore {
    CreateMatchdayScore {
        player_id,
        wins,
        draws,
        losses,
    }
}

fn constraint_of(err: sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_string),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn season_defaults_and_partial_update(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Spring", date(2025, 3, 1)))
        .await
        .unwrap();
    assert_eq!(season.point_rules().win, 2);
    assert_eq!(season.top_matchdays_limit, 8);

    let updated = SeasonRepo::update(
        &pool,
        season.id,
        &UpdateSeason {
            points_draw: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Spring");
    assert_eq!(updated.points_win, 2);
    assert_eq!(updated.points_draw, 2);
    assert!(updated.updated_at >= season.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seasons_list_newest_first_and_active_lookup(pool: PgPool) {
    let old = SeasonRepo::create(&pool, &new_season("Old", date(2024, 1, 1)))
        .await
        .unwrap();
    let new = SeasonRepo::create(&pool, &new_season("New", date(2025, 1, 1)))
        .await
        .unwrap();
    SeasonRepo::update(
        &pool,
        new.id,
        &UpdateSeason {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let ids: Vec<i64> = SeasonRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![new.id, old.id]);

    let active = SeasonRepo::find_active(&pool).await.unwrap().unwrap();
    assert_eq!(active.id, old.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_season_dates_violate_check(pool: PgPool) {
    let mut input = new_season("Backwards", date(2025, 3, 1));
    input.end_date = date(2025, 1, 1);

    let err = SeasonRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(constraint_of(err).as_deref(), Some("ck_seasons_date_range"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_season_cascades(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Gone", date(2025, 1, 1)))
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();
    let score = MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 1, 0, 0))
        .await
        .unwrap();

    assert!(SeasonRepo::delete(&pool, season.id).await.unwrap());

    assert!(PlayerRepo::find_by_id(&pool, player.id).await.unwrap().is_none());
    assert!(MatchdayRepo::find_by_id(&pool, matchday.id)
        .await
        .unwrap()
        .is_none());
    assert!(MatchdayScoreRepo::find_by_id(&pool, score.id)
        .await
        .unwrap()
        .is_none());
    assert!(!SeasonRepo::delete(&pool, season.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Players and matchdays
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn player_update_keeps_unset_fields(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Roster", date(2025, 1, 1)))
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    assert!(player.active);

    let updated = PlayerRepo::update(
        &pool,
        player.id,
        &UpdatePlayer {
            display_name: None,
            active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.display_name, "Ana");
    assert!(!updated.active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn matchday_number_unique_per_season(pool: PgPool) {
    let first = SeasonRepo::create(&pool, &new_season("First", date(2025, 1, 1)))
        .await
        .unwrap();
    let second = SeasonRepo::create(&pool, &new_season("Second", date(2025, 4, 1)))
        .await
        .unwrap();

    MatchdayRepo::create(&pool, first.id, &new_matchday(1))
        .await
        .unwrap();
    // Same number in another season is fine.
    MatchdayRepo::create(&pool, second.id, &new_matchday(1))
        .await
        .unwrap();

    let err = MatchdayRepo::create(&pool, first.id, &new_matchday(1))
        .await
        .unwrap_err();
    assert_eq!(
        constraint_of(err).as_deref(),
        Some("uq_matchdays_season_number")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn matchdays_list_by_number_and_toggle_closed(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Order", date(2025, 1, 1)))
        .await
        .unwrap();
    let third = MatchdayRepo::create(&pool, season.id, &new_matchday(3))
        .await
        .unwrap();
    let first = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();

    let numbers: Vec<i32> = MatchdayRepo::list_by_season(&pool, season.id)
        .await
        .unwrap()
        .iter()
        .map(|m| m.number)
        .collect();
    assert_eq!(numbers, vec![1, 3]);

    let closed = MatchdayRepo::set_closed(&pool, &[first.id, third.id], true)
        .await
        .unwrap();
    assert_eq!(closed, 2);
    let found = MatchdayRepo::find_by_ids(&pool, &[first.id, third.id])
        .await
        .unwrap();
    assert!(found.iter().all(|m| m.is_closed));

    let renumbered = MatchdayRepo::update(
        &pool,
        third.id,
        &UpdateMatchday {
            number: Some(2),
            match_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renumbered.number, 2);
    assert!(renumbered.is_closed);
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_score_per_player_per_matchday(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Scores", date(2025, 1, 1)))
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();

    MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 1, 0, 0))
        .await
        .unwrap();
    let err = MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 2, 0, 0))
        .await
        .unwrap_err();
    assert_eq!(
        constraint_of(err).as_deref(),
        Some("uq_matchday_scores_matchday_player")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_tallies_violate_check(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Scores", date(2025, 1, 1)))
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();

    let err = MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 0, -1, 0))
        .await
        .unwrap_err();
    assert_eq!(
        constraint_of(err).as_deref(),
        Some("ck_matchday_scores_draws_non_negative")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn score_update_leaves_derived_fields(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Scores", date(2025, 1, 1)))
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();
    let score = MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 1, 1, 1))
        .await
        .unwrap();

    let updated = MatchdayScoreRepo::update(
        &pool,
        score.id,
        &UpdateMatchdayScore {
            losses: Some(0),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!((updated.wins, updated.draws, updated.losses), (1, 1, 0));
    assert_eq!(updated.total_points, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn matchday_scores_listed_by_total_then_name(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Table", date(2025, 1, 1)))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();
    for name in ["Cleo", "Ben", "Ana"] {
        let player = PlayerRepo::create(&pool, season.id, &new_player(name))
            .await
            .unwrap();
        MatchdayScoreRepo::create(&pool, matchday.id, &new_score(player.id, 0, 0, 0))
            .await
            .unwrap();
    }

    let names: Vec<String> = MatchdayScoreRepo::list_by_matchday(&pool, matchday.id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.display_name)
        .collect();
    assert_eq!(names, vec!["Ana", "Ben", "Cleo"]);
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn match_result_stored_as_text(pool: PgPool) {
    let season = SeasonRepo::create(&pool, &new_season("Matches", date(2025, 1, 1)))
        .await
        .unwrap();
    let ana = PlayerRepo::create(&pool, season.id, &new_player("Ana"))
        .await
        .unwrap();
    let ben = PlayerRepo::create(&pool, season.id, &new_player("Ben"))
        .await
        .unwrap();
    let matchday = MatchdayRepo::create(&pool, season.id, &new_matchday(1))
        .await
        .unwrap();

    let recorded = LeagueMatchRepo::create(
        &pool,
        matchday.id,
        &CreateLeagueMatch {
            player_a_id: ana.id,
            player_b_id: ben.id,
            result: MatchResult::AWin,
        },
    )
    .await
    .unwrap();
    assert_eq!(recorded.result, "a_win");
    assert_eq!(
        MatchResult::from_str_value(&recorded.result).unwrap(),
        MatchResult::AWin
    );

    let err = LeagueMatchRepo::create(
        &pool,
        matchday.id,
        &CreateLeagueMatch {
            player_a_id: ana.id,
            player_b_id: ana.id,
            result: MatchResult::Draw,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(
        constraint_of(err).as_deref(),
        Some("ck_matches_distinct_players")
    );
}
