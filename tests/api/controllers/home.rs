use axum::{body::Body, extract::Request, http::StatusCode};
use http_body_util::BodyExt;
use nexus_scans::model::HomeView;

use crate::{AppStateTest, read_json};

#[tokio::test]
async fn health_should_be_ok() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let response = test_state.generate_response(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let response_body = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(&response_body[..], b"Alive");
}

#[tokio::test]
async fn home_should_list_catalog_and_popular() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let view: HomeView = read_json(response).await;
    assert!(!view.ai_mode);
    assert_eq!(view.latest.len(), 8);
    assert_eq!(view.popular.len(), 5);
    assert!(view.popular.iter().all(|c| c.is_hot || c.is_new));
    assert!(view.latest.iter().all(|c| c.latest_chapters.len() <= 3));
}

#[tokio::test]
async fn genres_should_list_form_genres() {
    let test_state = AppStateTest::new().await;

    let request = Request::builder().uri("/genres").body(Body::empty()).unwrap();
    let response = test_state.generate_response(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let genres: Vec<String> = read_json(response).await;
    assert_eq!(genres.len(), 15);
    assert!(genres.contains(&"Martial Arts".to_string()));
}
