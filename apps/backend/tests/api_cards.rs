//! Cards API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test card list is empty for a new learner.
#[tokio::test]
#[ignore = "requires database"]
async fn test_list_cards_empty() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();

    let response = server.get(&fixtures::cards_url(user_id)).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["cards"].as_array().unwrap().is_empty());
    assert_eq!(body["pending_count"], 0);
}

/// Test creating a card makes it due immediately.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_card_is_pending() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();

    let response = server
        .post(&fixtures::cards_url(user_id))
        .json(&fixtures::create_card_request("spanish", "house", "casa"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["card"]["original_text"], "house");

    let list: serde_json::Value = server.get(&fixtures::cards_url(user_id)).await.json();
    assert_eq!(list["cards"].as_array().unwrap().len(), 1);
    assert_eq!(list["pending_count"], 1);

    let stored = ctx
        .db
        .list_cards(user_id, None)
        .await
        .unwrap()
        .pop()
        .unwrap();
    assert_eq!(stored.ease_factor, 2.5);
    assert_eq!(stored.repetition_count, 0);
    assert_eq!(stored.consecutive_attempts, 1);

    // Cleanup
    ctx.cleanup_user(user_id).await;
}

/// Test creating a card with identical texts is rejected.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_card_rejects_identical_texts() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();

    let response = server
        .post(&fixtures::cards_url(user_id))
        .json(&fixtures::create_card_request("english", "Hello", " hello"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation_error");
}

/// Test list respects deck filter.
#[tokio::test]
#[ignore = "requires database"]
async fn test_list_cards_respects_deck_filter() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();
    let deck = fixtures::unique_deck_path("spanish");

    for (o, t) in [("house", "casa"), ("dog", "perro")] {
        server
            .post(&fixtures::cards_url(user_id))
            .json(&fixtures::create_card_request(&deck, o, t))
            .await
            .assert_status(StatusCode::CREATED);
    }
    ctx.create_card(user_id, "cat", "gato").await;

    let response = server
        .get(&format!("{}?deck_path={}", fixtures::cards_url(user_id), deck))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cards"].as_array().unwrap().len(), 2);

    // Cleanup
    ctx.cleanup_user(user_id).await;
}

/// Test importing a batch of valid cards.
#[tokio::test]
#[ignore = "requires database"]
async fn test_import_cards_success() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();

    let response = server
        .post(&format!("{}/import", fixtures::cards_url(user_id)))
        .json(&fixtures::import_request(
            "spanish",
            &[("House", "Casa"), ("Dog", "Perro"), ("Cat", "Gato")],
        ))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["cards_count"], 3);
    assert_eq!(body["message"], "3 cards were imported");

    let cards = ctx.db.list_cards(user_id, Some("spanish")).await.unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].original_text, "house");

    // Cleanup
    ctx.cleanup_user(user_id).await;
}

/// Test import stops at the first invalid card and keeps earlier ones.
#[tokio::test]
#[ignore = "requires database"]
async fn test_import_stops_at_invalid_card() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let user_id = ctx.new_user();

    let response = server
        .post(&format!("{}/import", fixtures::cards_url(user_id)))
        .json(&fixtures::import_request(
            "spanish",
            &[("house", "casa"), ("radio", "Radio"), ("cat", "gato")],
        ))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["cards_count"], 1);

    let cards = ctx.db.list_cards(user_id, None).await.unwrap();
    assert_eq!(cards.len(), 1);

    // Cleanup
    ctx.cleanup_user(user_id).await;
}
