use actix_web::{http::StatusCode, test};
use futsal_attendance::types::error::AppError;
use entity::league_match::LeagueMatchStatus;
use futsal_attendance::types::league::{SnapshotMatch, SnapshotPlayer, SnapshotStat};
use serde_json::json;

mod common;
use common::{client::TestClient, test_data, TestContext};

async fn seeded() -> (TestContext, TestClient) {
    let ctx = TestContext::new().await;
    let summary = ctx
        .db
        .replace_league_data(test_data::league_snapshot())
        .await
        .expect("Failed to import league snapshot");
    assert_eq!(summary.teams, 3);
    assert_eq!(summary.matches, 3);
    assert_eq!(summary.players, 3);
    assert_eq!(summary.stats, 4);

    let client = TestClient::new(ctx.db.clone());
    (ctx, client)
}

fn names(body: &serde_json::Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_league_stats_ranked_with_unranked_last() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|t| t["externalId"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![20, 10, 30]);
    assert_eq!(body[0]["points"], 25);
    assert_eq!(body[0]["form"], json!(["W", "D", "L"]));
    assert_eq!(body[2]["rank"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_league_matches_filtered_by_team() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/matches?teamId=10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|m| m["externalId"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m-1", "m-3"]);
    assert_eq!(body[0]["date"], "2025-03-06T20:00:00.000Z");
    assert_eq!(body[0]["status"], "Played");

    let req = test::TestRequest::get().uri("/lzv/matches").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let ids: Vec<&str> = body.as_array().unwrap().iter().map(|m| m["externalId"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3"]);
}

#[tokio::test]
async fn test_league_players_for_team_sorted_by_goals() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/players?teamId=10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(names(&body), vec!["Wout", "Jens"]);
    assert_eq!(body[0]["goals"], 9);
    assert_eq!(body[1]["goals"], 4);
    assert_eq!(body[1]["teamId"], 10);
    assert_eq!(body[1]["teamIds"], json!([10, 20]));
    assert!(body[1].get("teams").is_none());
}

#[tokio::test]
async fn test_league_players_unfiltered_sums_teams() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/players").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(names(&body), vec!["Jens", "Wout", "Karel"]);

    let jens = &body[0];
    assert_eq!(jens["goals"], 11);
    assert_eq!(jens["assists"], 4);
    assert_eq!(jens["gamesPlayed"], 11);
    assert_eq!(jens["teamId"], 10);
    let breakdown: Vec<(i64, i64)> = jens["teams"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["teamId"].as_i64().unwrap(), s["goals"].as_i64().unwrap()))
        .collect();
    assert_eq!(breakdown, vec![(10, 4), (20, 7)]);
}

#[tokio::test]
async fn test_league_player_without_stats_listed_unfiltered_only() {
    let ctx = TestContext::new().await;
    let mut snapshot = test_data::league_snapshot();
    snapshot.players.push(SnapshotPlayer { external_id: 504, name: "Ruben".to_string() });
    ctx.db.replace_league_data(snapshot).await.unwrap();

    let all = ctx.db.list_league_players(None).await.unwrap();
    let ruben = all.iter().find(|p| p.name == "Ruben").unwrap();
    assert_eq!(ruben.goals, 0);
    assert_eq!(ruben.team_id, None);
    assert!(ruben.team_ids.is_empty());
    assert_eq!(all.last().map(|p| p.name.as_str()), Some("Ruben"));

    let team = ctx.db.list_league_players(Some(10)).await.unwrap();
    assert!(team.iter().all(|p| p.name != "Ruben"));
}

#[tokio::test]
async fn test_league_team_detail() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/team/10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["team"]["name"], "Zaal Oost");
    assert_eq!(body["team"]["rank"], 2);
    assert_eq!(body["matches"].as_array().unwrap().len(), 2);
    assert_eq!(names(&body["players"]), vec!["Wout", "Jens"]);
}

#[tokio::test]
async fn test_league_team_not_found() {
    let (_ctx, client) = seeded().await;
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/lzv/team/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/lzv/team/oost").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_league_reimport_replaces_everything() {
    let (ctx, _client) = seeded().await;

    let mut snapshot = test_data::league_snapshot();
    snapshot.teams.truncate(1);
    snapshot.matches.clear();
    snapshot.stats.retain(|s| s.player_external_id == 502);
    ctx.db.replace_league_data(snapshot).await.unwrap();

    let teams = ctx.db.list_league_teams().await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].external_id, 10);
    assert!(ctx.db.list_league_matches(None).await.unwrap().is_empty());

    let players = ctx.db.list_league_players(None).await.unwrap();
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].name, "Wout");
}

#[tokio::test]
async fn test_league_import_unknown_player_keeps_old_data() {
    let (ctx, _client) = seeded().await;

    let mut snapshot = test_data::league_snapshot();
    snapshot.teams.clear();
    snapshot.stats.push(SnapshotStat {
        player_external_id: 999,
        team_id: 10,
        jersey_number: None,
        games_played: 1,
        goals: 1,
        assists: 0,
        fairplay_rank: None,
    });

    let err = ctx.db.replace_league_data(snapshot).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert_eq!(ctx.db.list_league_teams().await.unwrap().len(), 3);
    assert_eq!(ctx.db.list_league_players(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_league_game_listed_for_both_teams() {
    let ctx = TestContext::new().await;
    let game = |team_id| SnapshotMatch {
        external_id: "g-1".to_string(),
        date: "2025-03-27T20:00:00.000Z".to_string(),
        home_team: "Zaal Oost".to_string(),
        away_team: "Rapid Noord".to_string(),
        home_score: Some(3),
        away_score: Some(2),
        location: None,
        team_id,
        status: LeagueMatchStatus::Played,
    };
    let mut snapshot = test_data::league_snapshot();
    snapshot.matches = vec![game(10), game(20)];
    let summary = ctx.db.replace_league_data(snapshot).await.unwrap();
    assert_eq!(summary.matches, 2);

    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for team in [10, 20] {
        let req = test::TestRequest::get()
            .uri(&format!("/lzv/matches?teamId={team}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let games = body.as_array().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0]["externalId"], "g-1");
        assert_eq!(games[0]["teamId"], team);
    }
}
