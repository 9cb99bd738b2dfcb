use actix_web::{http::StatusCode, test};
use entity::attendance::AttendanceStatus;
use serde_json::json;

mod common;
use common::{client::TestClient, test_data, TestContext};

#[tokio::test]
async fn test_match_create_has_no_attendance() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    client.create_player("Bob", vec![oost]).await;

    let req = test::TestRequest::post()
        .uri("/Matches")
        .set_json(json!({
            "date": "2025-03-04T19:30:00.000Z",
            "location": "Sporthal De Vijvers",
            "teamName": "Zaal Oost",
            "teamId": oost
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["date"], "2025-03-04T19:30:00.000Z");
    assert_eq!(body["location"], "Sporthal De Vijvers");
    assert_eq!(body["name"], serde_json::Value::Null);
    assert_eq!(body["team"], json!({ "id": oost, "name": "Zaal Oost" }));
    assert_eq!(body["attendances"], json!([]));

    let id = body["id"].as_i64().unwrap() as i32;
    assert!(ctx.db.list_attendance_for_match(id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_match_create_invalid_date() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/Matches")
        .set_json(json!({ "date": "volgende dinsdag" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/Matches")
        .set_json(json!({ "location": "Sporthal" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(ctx.db.list_matches(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_match_list_sorted_by_date() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for date in [5_000, 1_000, 3_000, 2_000] {
        client.create_match(test_data::match_on(date, None)).await;
    }

    let req = test::TestRequest::get().uri("/Matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let dates: Vec<&str> = body.as_array().unwrap().iter().map(|m| m["date"].as_str().unwrap()).collect();
    assert_eq!(
        dates,
        vec![
            "1970-01-01T00:00:01.000Z",
            "1970-01-01T00:00:02.000Z",
            "1970-01-01T00:00:03.000Z",
            "1970-01-01T00:00:05.000Z",
        ]
    );
}

#[tokio::test]
async fn test_match_list_for_player_without_teams_is_empty() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    client.create_match(test_data::match_on(1_000, Some(oost))).await;
    client.create_match(test_data::match_on(2_000, None)).await;
    let loner = client.create_player("Invaller", vec![]).await;

    let req = test::TestRequest::get()
        .uri(&format!("/Matches?playerId={loner}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    // unknown player behaves the same
    assert!(ctx.db.list_matches(Some(4040)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_match_list_for_player_unions_teams() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    let west = client.create_team("Zaal West").await;
    let noord = client.create_team("Zaal Noord").await;
    let bob = client.create_player("Bob", vec![west, oost]).await;

    let late_oost = client.create_match(test_data::match_on(9_000, Some(oost))).await;
    let early_west = client.create_match(test_data::match_on(1_000, Some(west))).await;
    client.create_match(test_data::match_on(5_000, Some(noord))).await;
    client.create_match(test_data::match_on(4_000, None)).await;
    let mid_oost = client.create_match(test_data::match_on(3_000, Some(oost))).await;

    let req = test::TestRequest::get()
        .uri(&format!("/Matches?playerId={bob}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![early_west as i64, mid_oost as i64, late_oost as i64]);
}

#[tokio::test]
async fn test_match_list_bad_player_id() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/Matches?playerId=bob").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query parameter"));
}

#[tokio::test]
async fn test_match_get_resolves_players_and_team() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    let bob = client.create_player("Bob", vec![oost]).await;
    let alice = client.create_player("Alice", vec![oost]).await;
    let m = client.create_match(test_data::match_on(1_000, Some(oost))).await;

    ctx.db.upsert_attendance(m, alice, AttendanceStatus::NotPresent).await.unwrap();
    ctx.db.upsert_attendance(m, bob, AttendanceStatus::Present).await.unwrap();

    let req = test::TestRequest::get().uri(&format!("/Matches/{m}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["team"]["name"], "Zaal Oost");
    let attendances = body["attendances"].as_array().unwrap();
    assert_eq!(attendances.len(), 2);
    assert_eq!(attendances[0]["playerId"], alice);
    assert_eq!(attendances[0]["status"], "NotPresent");
    assert_eq!(attendances[0]["player"], json!({ "id": alice, "name": "Alice" }));
    assert_eq!(attendances[1]["player"]["name"], "Bob");
}

#[tokio::test]
async fn test_match_dangling_team_is_null() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let m = client.create_match(test_data::match_on(1_000, Some(321))).await;
    let view = ctx.db.get_match(m).await.unwrap().unwrap();
    assert_eq!(view.team_id, Some(321));
    assert!(view.team.is_none());
}

#[tokio::test]
async fn test_match_get_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/Matches/12").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Match not found");
}

#[tokio::test]
async fn test_match_update_is_partial() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    let m = client.create_match(test_data::match_on(1_741_116_600_000, Some(oost))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/Matches/{m}"))
        .set_json(json!({ "name": "Bekermatch" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Bekermatch");
    assert_eq!(body["location"], "Sporthal De Vijvers");
    assert_eq!(body["teamId"], oost);
    assert_eq!(body["date"], "2025-03-04T19:30:00.000Z");

    let req = test::TestRequest::put()
        .uri(&format!("/Matches/{m}"))
        .set_json(json!({ "date": "2025-03-11T20:30" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["date"], "2025-03-11T20:30:00.000Z");
    assert_eq!(body["name"], "Bekermatch");
}

#[tokio::test]
async fn test_match_update_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/Matches/99")
        .set_json(json!({ "name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_match_delete_cascades_attendance() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let oost = client.create_team("Zaal Oost").await;
    let bob = client.create_player("Bob", vec![oost]).await;
    let m = client.create_match(test_data::match_on(1_000, Some(oost))).await;
    let other = client.create_match(test_data::match_on(2_000, Some(oost))).await;
    ctx.db.upsert_attendance(m, bob, AttendanceStatus::Maybe).await.unwrap();
    ctx.db.upsert_attendance(other, bob, AttendanceStatus::Present).await.unwrap();

    let req = test::TestRequest::delete().uri(&format!("/Matches/{m}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(ctx.db.get_match(m).await.unwrap().is_none());
    assert!(ctx.db.list_attendance_for_match(m).await.unwrap().is_empty());
    assert_eq!(ctx.db.list_attendance_for_match(other).await.unwrap().len(), 1);

    let req = test::TestRequest::delete().uri(&format!("/Matches/{m}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
