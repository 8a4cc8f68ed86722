use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use nexus_scans::recommendation::{GeminiClient, Recommender};
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone)]
struct FakeModel {
    status: StatusCode,
    body: Value,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<(String, Option<String>, Value)>>>,
}

async fn generate(
    State(model): State<FakeModel>,
    uri: Uri,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    model.hits.fetch_add(1, Ordering::SeqCst);

    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *model.last_request.lock().await = Some((uri.path().to_string(), api_key, request));

    (model.status, Json(model.body.clone()))
}

async fn spawn_model(status: StatusCode, body: Value) -> (String, FakeModel) {
    let model = FakeModel {
        status,
        body,
        hits: Arc::new(AtomicUsize::new(0)),
        last_request: Arc::new(Mutex::new(None)),
    };

    let router = Router::new().fallback(generate).with_state(model.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    (address, model)
}

fn client(address: String, api_key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        reqwest::Client::new(),
        address,
        "test-model".to_string(),
        api_key.map(|key| SecretString::from(key.to_string())),
    )
}

fn item(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Title {}", id),
        "slug": format!("title-{}", id),
        "description": "An engaging description.",
        "coverUrl": format!("https://picsum.photos/seed/title-{}/300/450", id),
        "rating": 4.7,
        "status": "Ongoing",
        "type": "Manhwa",
        "author": "Writer",
        "genres": ["Action"]
    })
}

fn answer(text: String) -> Value {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
}

#[tokio::test]
async fn should_return_hydrated_comics_on_success() {
    let text = json!([item("a"), item("b"), item("c")]).to_string();
    let (address, model) = spawn_model(StatusCode::OK, answer(text)).await;

    let comics = client(address, Some("test-key"))
        .recommend("dungeon crawlers")
        .await;

    assert_eq!(comics.len(), 3);
    for comic in &comics {
        assert_eq!(comic.is_new, Some(true));
        assert_eq!(comic.chapters.len(), 20);
        let numbers: Vec<u32> = comic
            .chapters
            .iter()
            .map(|c| c.number.parse().unwrap())
            .collect();
        assert_eq!(numbers, (1..=20).rev().collect::<Vec<u32>>());
    }
    assert_eq!(comics[0].author, "Writer");
    assert_eq!(comics[0].artist, "");

    assert_eq!(model.hits.load(Ordering::SeqCst), 1);
    let (path, api_key, request) = model.last_request.lock().await.take().unwrap();
    assert_eq!(path, "/v1beta/models/test-model:generateContent");
    assert_eq!(api_key.as_deref(), Some("test-key"));
    assert_eq!(
        request["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert!(
        request["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("dungeon crawlers")
    );
}

#[tokio::test]
async fn should_not_call_model_without_api_key() {
    let (address, model) = spawn_model(StatusCode::OK, answer("[]".to_string())).await;

    assert!(client(address.clone(), None).recommend("anything").await.is_empty());
    assert!(client(address, Some("")).recommend("anything").await.is_empty());

    assert_eq!(model.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_not_call_model_for_blank_query() {
    let (address, model) = spawn_model(StatusCode::OK, answer("[]".to_string())).await;

    let gemini = client(address, Some("test-key"));
    assert!(gemini.recommend("").await.is_empty());
    assert!(gemini.recommend("   ").await.is_empty());

    assert_eq!(model.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_return_empty_when_answer_is_malformed() {
    let (address, model) = spawn_model(StatusCode::OK, answer("not json at all".to_string())).await;

    let comics = client(address, Some("test-key")).recommend("romance").await;

    assert!(comics.is_empty());
    assert_eq!(model.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_return_empty_when_answer_violates_schema() {
    let mut bad = item("b");
    bad["type"] = json!("Webtoon");
    let text = json!([item("a"), bad]).to_string();
    let (address, _) = spawn_model(StatusCode::OK, answer(text)).await;

    let comics = client(address, Some("test-key")).recommend("romance").await;

    assert!(comics.is_empty());
}

#[tokio::test]
async fn should_return_empty_when_answer_has_no_candidates() {
    let (address, _) = spawn_model(StatusCode::OK, json!({ "candidates": [] })).await;

    let comics = client(address, Some("test-key")).recommend("romance").await;

    assert!(comics.is_empty());
}

#[tokio::test]
async fn should_return_empty_when_model_fails() {
    let (address, _) = spawn_model(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "code": 500, "message": "boom" } }),
    )
    .await;

    let comics = client(address, Some("test-key")).recommend("romance").await;

    assert!(comics.is_empty());
}

#[tokio::test]
async fn should_return_empty_when_transport_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let comics = client(address, Some("test-key")).recommend("romance").await;

    assert!(comics.is_empty());
}
