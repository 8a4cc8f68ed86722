use std::{
    sync::{Arc, atomic::Ordering},
    time::Duration,
};

use axum::{body::Body, http::Request, http::StatusCode};
use nexus_scans::{
    controllers::recommendations::RecommendationResponse, model::HomeView,
    recommendation::SearchState,
};
use serde_json::json;

use crate::{AppStateTest, StubRecommender, json_request, read_json};

fn search(query: &str) -> Request<Body> {
    json_request("POST", "/recommendations", None, json!({ "query": query }))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn search_should_publish_results_to_home() {
    let test_state = AppStateTest::new().await;

    let response = test_state.generate_response(search("regression")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: RecommendationResponse = read_json(response).await;
    assert!(body.applied);
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].chapters.len(), 20);

    let view: HomeView = read_json(test_state.generate_response(get("/")).await).await;
    assert!(view.ai_mode);
    assert!(view.popular.is_empty());
    assert_eq!(view.latest[0].id, "regression");
}

#[tokio::test]
async fn clear_should_restore_catalog_view() {
    let test_state = AppStateTest::new().await;
    test_state.generate_response(search("regression")).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/recommendations")
        .body(Body::empty())
        .unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let state: SearchState = read_json(test_state.generate_response(get("/recommendations")).await).await;
    assert!(state.results.is_none());
    assert!(!state.is_loading);

    let view: HomeView = read_json(test_state.generate_response(get("/")).await).await;
    assert!(!view.ai_mode);
}

#[tokio::test]
async fn blank_query_is_rejected_and_keeps_earlier_results() {
    let recommender = Arc::new(StubRecommender::default());
    let test_state = AppStateTest::with_recommender(recommender.clone()).await;
    test_state.generate_response(search("regression")).await;

    let response = test_state.generate_response(search("   ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors: serde_json::Value = read_json(response).await;
    assert!(errors.get("query").is_some());

    assert_eq!(recommender.calls.load(Ordering::SeqCst), 1);

    let state: SearchState = read_json(test_state.generate_response(get("/recommendations")).await).await;
    assert_eq!(state.query, "regression");
    assert!(!state.is_loading);

    let view: HomeView = read_json(test_state.generate_response(get("/")).await).await;
    assert!(view.ai_mode);
    assert_eq!(view.latest.len(), 1);
    assert_eq!(view.latest[0].id, "regression");
}

#[tokio::test]
async fn overly_long_query_is_rejected() {
    let test_state = AppStateTest::new().await;

    let response = test_state.generate_response(search(&"a".repeat(201))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stale_response_should_not_overwrite_newer_query() {
    let recommender = StubRecommender::default().with_delay("slow", Duration::from_millis(300));
    let test_state = AppStateTest::with_recommender(Arc::new(recommender)).await;

    let slow_router = test_state.router.clone();
    let slow = tokio::spawn(async move {
        use tower::ServiceExt;
        slow_router.oneshot(search("slow")).await.unwrap()
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    let state: SearchState = read_json(test_state.generate_response(get("/recommendations")).await).await;
    assert!(state.is_loading);

    let fast: RecommendationResponse = read_json(test_state.generate_response(search("fast")).await).await;
    assert!(fast.applied);

    let slow: RecommendationResponse = read_json(slow.await.unwrap()).await;
    assert!(!slow.applied);
    assert!(slow.generation < fast.generation);

    let state: SearchState = read_json(test_state.generate_response(get("/recommendations")).await).await;
    assert_eq!(state.query, "fast");
    assert!(!state.is_loading);
    assert_eq!(state.results.unwrap()[0].id, "fast");
}

#[tokio::test]
async fn abandoned_search_still_settles_the_feed() {
    let recommender = StubRecommender::default().with_delay("slow", Duration::from_millis(200));
    let test_state = AppStateTest::with_recommender(Arc::new(recommender)).await;

    let slow_router = test_state.router.clone();
    let slow = tokio::spawn(async move {
        use tower::ServiceExt;
        slow_router.oneshot(search("slow")).await.unwrap()
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    slow.abort();

    tokio::time::sleep(Duration::from_millis(500)).await;
    let state: SearchState = read_json(test_state.generate_response(get("/recommendations")).await).await;
    assert_eq!(state.query, "slow");
    assert!(!state.is_loading);
    assert_eq!(state.results.unwrap()[0].id, "slow");
}
