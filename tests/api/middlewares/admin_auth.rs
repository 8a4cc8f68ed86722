use axum::{body::Body, http::Request};
use nexus_scans::{auth::encode_jwt, config::Jwt};
use reqwest::StatusCode;

use crate::{AppStateTest, authorized_request};

fn session_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/auth/session");
    if let Some(value) = authorization {
        builder = builder.header(axum::http::header::AUTHORIZATION, value);
    }

    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn should_throw_error_when_request_does_not_contain_header_authorization() {
    let test_state = AppStateTest::new().await;

    let response = test_state.generate_response(session_request(None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_throw_error_when_auth_header_is_invalid() {
    let test_state = AppStateTest::new().await;

    let response = test_state
        .generate_response(session_request(Some("random-string")))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_throw_error_when_auth_header_does_not_contain_bearer() {
    let test_state = AppStateTest::new().await;

    let response = test_state
        .generate_response(session_request(Some("not-bearer random-string")))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_throw_error_when_jwt_token_is_invalid() {
    let test_state = AppStateTest::new().await;

    let response = test_state
        .generate_response(session_request(Some("bearer random-string")))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_throw_error_when_token_is_signed_with_another_secret() {
    let test_state = AppStateTest::new().await;
    let foreign = Jwt {
        secret: "another secret".into(),
        ..test_state.config.jwt.clone()
    };
    let (token, _) = encode_jwt(&foreign).unwrap();

    let response = test_state
        .generate_response(authorized_request("GET", "/auth/session", &token))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_be_ok_when_token_is_valid() {
    let test_state = AppStateTest::new().await;
    let (token, _) = encode_jwt(&test_state.config.jwt).unwrap();

    let response = test_state
        .generate_response(authorized_request("GET", "/auth/session", &token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}
