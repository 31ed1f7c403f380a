use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde::Deserialize;
use warp::Filter;
use warp::http::StatusCode;

use stone_core::{content_pool, day::utc_today, round::next_round, schedule::higherlower_open};
use stone_persistence::StoreHandle;
use stone_persistence::repositories::{ContentRepository, PlayerRepository};
use stone_types::{DailyPayload, Game, NextRoundRequest, ScoreRequest};

use crate::config::Config;

pub mod config;

#[derive(Deserialize)]
struct DailyWordQuery {
    username: Option<String>,
}

pub fn create_routes(
    store: Arc<StoreHandle>,
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let store_filter = warp::any().map({
        let store = store.clone();
        move || store.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Daily content, one route for all five games
    let daily_word = warp::path!("api" / "game" / "daily-word" / String)
        .and(warp::get())
        .and(warp::query::<DailyWordQuery>())
        .and(store_filter.clone())
        .and_then(handle_daily_word);

    // Higher/Lower round resolution - stateless, no store involved
    let next_round = warp::path!("api" / "game" / "higherlower" / "next")
        .and(warp::post())
        .and(warp::body::json())
        .and_then(handle_next_round);

    // Score submission
    let score = warp::path!("api" / "game" / "score")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handle_score);

    // Per-game all-time top-10
    let leaderboard = warp::path!("api" / "game" / "leaderboard" / String)
        .and(warp::get())
        .and(store_filter.clone())
        .and(config_filter.clone())
        .and_then(handle_leaderboard);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(daily_word)
        .or(next_round)
        .or(score)
        .or(leaderboard)
        .with(cors)
        .with(warp::log("suistone"))
}

async fn handle_daily_word(
    game: String,
    query: DailyWordQuery,
    store: Arc<StoreHandle>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (status, body) = match game.parse::<Game>() {
        Ok(game) => daily_content_response(game, query.username.as_deref(), &store).await,
        Err(err) => (
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": err.to_string() }),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// The whole daily-content policy in one place: schedule window, username
/// requirement, play-gate, degraded fallback, lazy generation, read-back.
async fn daily_content_response(
    game: Game,
    username: Option<&str>,
    store: &StoreHandle,
) -> (StatusCode, serde_json::Value) {
    // Weekday window comes first, before the username check - matching the
    // original endpoint ordering.
    if game == Game::HigherLower && !higherlower_open(Utc::now().weekday()) {
        return (
            StatusCode::FORBIDDEN,
            serde_json::json!({ "error": "Higher/Lower only runs on Tuesdays and Saturdays!" }),
        );
    }

    let username = match username {
        Some(username) if !username.is_empty() => username,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Username required" }),
            );
        }
    };

    // Fail-open: with the store down everyone gets the same fallback payload
    // and no "already played" state can be tracked.
    let db = match store.connection() {
        Some(db) => db,
        None => {
            tracing::warn!("Store offline, serving fallback content for {}", game);
            return (StatusCode::OK, fallback_body(game));
        }
    };

    let players = PlayerRepository::new(db.clone());
    let today = utc_today();
    match players.has_played_today(username, game, &today).await {
        Ok(true) => {
            return (
                StatusCode::FORBIDDEN,
                serde_json::json!({
                    "error": format!("You have already played {} today", game.label())
                }),
            );
        }
        Ok(false) => {}
        Err(err) => {
            tracing::error!("Play-gate check failed for {}: {}", username, err);
            return store_failure(err);
        }
    }

    // Lazily backfill today's content for every game, then read this one.
    let content = ContentRepository::new(db.clone());
    if let Err(err) = content.ensure_daily_content(&today).await {
        tracing::error!("Daily content generation failed: {}", err);
        return store_failure(err);
    }

    match content.find_for_day(&today, game).await {
        Ok(Some(payload)) => (StatusCode::OK, payload_body(game, payload)),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            serde_json::json!({
                "error": format!("No content found for {} today", game.label())
            }),
        ),
        Err(err) => {
            tracing::error!("Failed to read daily content for {}: {}", game, err);
            store_failure(err)
        }
    }
}

fn payload_body(game: Game, payload: DailyPayload) -> serde_json::Value {
    match payload {
        DailyPayload::Word(word) => serde_json::json!({ "word": word }),
        DailyPayload::Questions(questions) => serde_json::json!({ "questions": questions }),
        DailyPayload::Marker => {
            serde_json::json!({ "message": format!("{} initialized", game.label()) })
        }
    }
}

fn fallback_body(game: Game) -> serde_json::Value {
    match content_pool::fallback(game) {
        DailyPayload::Word(word) => serde_json::json!({ "word": word }),
        DailyPayload::Questions(questions) => serde_json::json!({ "questions": questions }),
        DailyPayload::Marker => serde_json::json!({
            "message": format!("{} initialized (DB offline)", game.label())
        }),
    }
}

fn store_failure(err: anyhow::Error) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({
            "error": "Failed to fetch daily content",
            "details": err.to_string()
        }),
    )
}

async fn handle_next_round(body: NextRoundRequest) -> Result<impl warp::Reply, warp::Rejection> {
    let (status, value) = match (body.username.as_deref(), body.current_number, body.guess) {
        (Some(username), Some(current), Some(guess)) if !username.is_empty() => {
            let outcome = next_round(current, guess);
            (
                StatusCode::OK,
                serde_json::json!({
                    "nextNumber": outcome.next_number,
                    "correct": outcome.correct
                }),
            )
        }
        _ => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": "Username, currentNumber, and guess required" }),
        ),
    };

    Ok(warp::reply::with_status(warp::reply::json(&value), status))
}

async fn handle_score(
    body: ScoreRequest,
    store: Arc<StoreHandle>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (status, value) = score_response(body, &store).await;
    Ok(warp::reply::with_status(warp::reply::json(&value), status))
}

async fn score_response(body: ScoreRequest, store: &StoreHandle) -> (StatusCode, serde_json::Value) {
    let missing_fields = (
        StatusCode::BAD_REQUEST,
        serde_json::json!({ "error": "Missing required fields: username, game, points, time" }),
    );

    let (Some(username), Some(game), Some(points), Some(time)) =
        (body.username, body.game, body.points, body.time)
    else {
        return missing_fields;
    };
    if username.is_empty() {
        return missing_fields;
    }

    let game = match game.parse::<Game>() {
        Ok(game) => game,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": err.to_string() }),
            );
        }
    };

    // Acknowledged but not saved; the client treats this as success.
    let db = match store.connection() {
        Some(db) => db,
        None => {
            tracing::warn!("Store offline, skipping score save for {}", username);
            return (
                StatusCode::OK,
                serde_json::json!({ "message": "Score not saved - DB offline" }),
            );
        }
    };

    match PlayerRepository::new(db.clone())
        .record_score(&username, game, points, time)
        .await
    {
        Ok(player_id) => {
            tracing::info!("Score {} saved for {} ({})", points, username, game);
            (
                StatusCode::CREATED,
                serde_json::json!({ "message": "Score saved", "playerId": player_id }),
            )
        }
        Err(err) => {
            tracing::error!("Failed to save score for {}: {}", username, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "Failed to save score",
                    "details": err.to_string()
                }),
            )
        }
    }
}

async fn handle_leaderboard(
    game: String,
    store: Arc<StoreHandle>,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (status, value) = match game.parse::<Game>() {
        Err(err) => (
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": err.to_string() }),
        ),
        Ok(game) => match store.connection() {
            None => (StatusCode::OK, serde_json::json!([])),
            Some(db) => {
                match PlayerRepository::new(db.clone())
                    .leaderboard(game, config.leaderboard_limit)
                    .await
                {
                    Ok(rows) => (StatusCode::OK, serde_json::json!(rows)),
                    Err(err) => {
                        tracing::error!("Failed to fetch leaderboard for {}: {}", game, err);
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            serde_json::json!({
                                "error": "Failed to fetch leaderboard",
                                "details": err.to_string()
                            }),
                        )
                    }
                }
            }
        },
    };

    Ok(warp::reply::with_status(warp::reply::json(&value), status))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{DatabaseConnection, EntityTrait};
    use stone_persistence::entities::prelude::{DailyContent, Players, Scores};

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            leaderboard_limit: 10,
        }
    }

    async fn test_db() -> DatabaseConnection {
        let db = stone_persistence::connection::connect_to_memory_database()
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn test_app(
        db: DatabaseConnection,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        create_routes(
            Arc::new(StoreHandle::connected(db)),
            Arc::new(test_config()),
        )
    }

    fn offline_app() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        create_routes(Arc::new(StoreHandle::disconnected()), Arc::new(test_config()))
    }

    async fn get_daily<F>(app: &F, game: &str, username: Option<&str>) -> (StatusCode, serde_json::Value)
    where
        F: Filter + 'static,
        F::Extract: warp::Reply + Send,
    {
        let path = match username {
            Some(username) => format!("/api/game/daily-word/{}?username={}", game, username),
            None => format!("/api/game/daily-word/{}", game),
        };
        let response = warp::test::request()
            .method("GET")
            .path(&path)
            .reply(app)
            .await;
        let body = serde_json::from_slice(response.body()).unwrap_or(serde_json::Value::Null);
        (response.status(), body)
    }

    async fn post_score<F>(app: &F, body: serde_json::Value) -> (StatusCode, serde_json::Value)
    where
        F: Filter + 'static,
        F::Extract: warp::Reply + Send,
    {
        let response = warp::test::request()
            .method("POST")
            .path("/api/game/score")
            .json(&body)
            .reply(app)
            .await;
        let value = serde_json::from_slice(response.body()).unwrap_or(serde_json::Value::Null);
        (response.status(), value)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app(test_db().await);

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_daily_word_requires_username() {
        let db = test_db().await;
        let app = test_app(db.clone());

        let (status, body) = get_daily(&app, "wordle", None).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Username required");

        // Rejection happens before generation; nothing was written.
        assert!(DailyContent::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_daily_word_unknown_game() {
        let app = test_app(test_db().await);

        let (status, body) = get_daily(&app, "chess", Some("0xabc")).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"], "Unknown game: chess");
    }

    #[tokio::test]
    async fn test_daily_word_serves_a_pool_word_and_backfills_all_games() {
        let db = test_db().await;
        let app = test_app(db.clone());

        let (status, body) = get_daily(&app, "wordle", Some("0xabc")).await;
        assert_eq!(status, 200);

        let word = body["word"].as_str().expect("word in response");
        let pool = content_pool::candidates(Game::Wordle);
        assert!(pool.contains(&DailyPayload::Word(word.to_string())));

        // One request generates the whole day's content, for every game.
        let rows = DailyContent::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), Game::ALL.len());
    }

    #[tokio::test]
    async fn test_daily_word_is_stable_within_a_day() {
        let app = test_app(test_db().await);

        let (_, first) = get_daily(&app, "hangman", Some("0xabc")).await;
        let (_, second) = get_daily(&app, "hangman", Some("0xdef")).await;
        assert_eq!(first["word"], second["word"]);
    }

    #[tokio::test]
    async fn test_trivia_daily_has_ten_questions() {
        let app = test_app(test_db().await);

        let (status, body) = get_daily(&app, "trivia", Some("0xabc")).await;
        assert_eq!(status, 200);

        let questions = body["questions"].as_array().expect("questions array");
        assert_eq!(questions.len(), 10);
        for question in questions {
            assert!(question["question"].is_string());
            assert!(question["options"].is_array());
            assert!(question["correctAnswer"].is_string());
        }
    }

    #[tokio::test]
    async fn test_minehunter_daily_is_a_session_marker() {
        let app = test_app(test_db().await);

        let (status, body) = get_daily(&app, "minehunter", Some("0xabc")).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Minehunter initialized");
    }

    #[tokio::test]
    async fn test_play_gate_blocks_after_score_submission() {
        let app = test_app(test_db().await);

        let (status, _) = get_daily(&app, "wordle", Some("0xabc")).await;
        assert_eq!(status, 200);

        let (status, _) = post_score(
            &app,
            serde_json::json!({
                "username": "0xabc", "game": "wordle", "points": 50, "time": 30
            }),
        )
        .await;
        assert_eq!(status, 201);

        let (status, body) = get_daily(&app, "wordle", Some("0xabc")).await;
        assert_eq!(status, 403);
        assert_eq!(body["error"], "You have already played Wordle today");

        // Still open for other games and players.
        let (status, _) = get_daily(&app, "hangman", Some("0xabc")).await;
        assert_eq!(status, 200);
        let (status, _) = get_daily(&app, "wordle", Some("0xother")).await;
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_higherlower_weekday_window() {
        let app = test_app(test_db().await);

        let (status, body) = get_daily(&app, "higherlower", Some("0xabc")).await;
        if higherlower_open(Utc::now().weekday()) {
            assert_eq!(status, 200);
            assert_eq!(body["message"], "Higher/Lower initialized");
        } else {
            assert_eq!(status, 403);
            assert_eq!(
                body["error"],
                "Higher/Lower only runs on Tuesdays and Saturdays!"
            );
        }
    }

    #[tokio::test]
    async fn test_higherlower_weekday_checked_before_username() {
        let app = test_app(test_db().await);

        let (status, _) = get_daily(&app, "higherlower", None).await;
        if higherlower_open(Utc::now().weekday()) {
            assert_eq!(status, 400);
        } else {
            assert_eq!(status, 403);
        }
    }

    #[tokio::test]
    async fn test_next_round_requires_all_fields() {
        let app = test_app(test_db().await);

        let response = warp::test::request()
            .method("POST")
            .path("/api/game/higherlower/next")
            .json(&serde_json::json!({ "username": "0xabc" }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], "Username, currentNumber, and guess required");
    }

    #[tokio::test]
    async fn test_next_round_draws_in_range_with_strict_comparison() {
        let app = test_app(test_db().await);

        // No draw from 1..=15 is strictly greater than 15 or strictly less
        // than 1, so these outcomes are deterministic.
        for (current, guess, expected) in [(15, "higher", false), (1, "lower", false)] {
            let response = warp::test::request()
                .method("POST")
                .path("/api/game/higherlower/next")
                .json(&serde_json::json!({
                    "username": "0xabc", "currentNumber": current, "guess": guess
                }))
                .reply(&app)
                .await;

            assert_eq!(response.status(), 200);
            let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
            let drawn = body["nextNumber"].as_i64().unwrap();
            assert!((1..=15).contains(&drawn));
            assert_eq!(body["correct"], expected);
        }
    }

    #[tokio::test]
    async fn test_score_creates_player_and_record() {
        let db = test_db().await;
        let app = test_app(db.clone());

        let (status, body) = post_score(
            &app,
            serde_json::json!({
                "username": "0xnew", "game": "minehunter", "points": 100, "time": 12
            }),
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["message"], "Score saved");
        let player_id = body["playerId"].as_str().expect("playerId in response");
        uuid::Uuid::parse_str(player_id).expect("playerId is a uuid");

        assert_eq!(Players::find().all(&db).await.unwrap().len(), 1);
        assert_eq!(Scores::find().all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_score_rejects_missing_fields() {
        let app = test_app(test_db().await);

        let (status, body) = post_score(
            &app,
            serde_json::json!({ "username": "0xabc", "game": "wordle" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body["error"],
            "Missing required fields: username, game, points, time"
        );
    }

    #[tokio::test]
    async fn test_score_rejects_unknown_game() {
        let app = test_app(test_db().await);

        let (status, body) = post_score(
            &app,
            serde_json::json!({
                "username": "0xabc", "game": "chess", "points": 1, "time": 1
            }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "Unknown game: chess");
    }

    #[tokio::test]
    async fn test_leaderboard_aggregates_per_game() {
        let app = test_app(test_db().await);

        for (username, points, time) in [("alice", 10, 5), ("alice", 20, 3), ("bob", 15, 4)] {
            let (status, _) = post_score(
                &app,
                serde_json::json!({
                    "username": username, "game": "wordle", "points": points, "time": time
                }),
            )
            .await;
            assert_eq!(status, 201);
        }

        let response = warp::test::request()
            .method("GET")
            .path("/api/game/leaderboard/wordle")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let rows: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(
            rows,
            serde_json::json!([
                { "username": "alice", "points": 30, "time": 3 },
                { "username": "bob", "points": 15, "time": 4 }
            ])
        );
    }

    #[tokio::test]
    async fn test_leaderboard_unknown_game() {
        let app = test_app(test_db().await);

        let response = warp::test::request()
            .method("GET")
            .path("/api/game/leaderboard/chess")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_offline_daily_words_fall_back() {
        let app = offline_app();

        let (status, body) = get_daily(&app, "wordle", Some("0xabc")).await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "STONE");

        let (status, body) = get_daily(&app, "hangman", Some("0xabc")).await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "GROK");

        let (status, body) = get_daily(&app, "trivia", Some("0xabc")).await;
        assert_eq!(status, 200);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);

        let (status, body) = get_daily(&app, "minehunter", Some("0xabc")).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Minehunter initialized (DB offline)");
    }

    #[tokio::test]
    async fn test_offline_score_is_acknowledged_not_saved() {
        let app = offline_app();

        let (status, body) = post_score(
            &app,
            serde_json::json!({
                "username": "0xabc", "game": "wordle", "points": 10, "time": 5
            }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["message"], "Score not saved - DB offline");
    }

    #[tokio::test]
    async fn test_offline_leaderboard_is_empty() {
        let app = offline_app();

        let response = warp::test::request()
            .method("GET")
            .path("/api/game/leaderboard/wordle")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        let rows: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(rows, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_http_endpoints_cors() {
        let app = test_app(test_db().await);

        let response = warp::test::request()
            .method("OPTIONS")
            .path("/health")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "GET")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_invalid_routes() {
        let app = test_app(test_db().await);

        let response = warp::test::request()
            .method("GET")
            .path("/invalid")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }
}
