use nexus_scans::model::HomeView;

use crate::spawn_app;

#[tokio::test]
async fn health_should_return_ok_and_alive() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body = response.text().await.unwrap();
    assert!(body.contains("Alive"));
}

#[tokio::test]
async fn home_should_be_served_over_http() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let view: HomeView = response.json().await.unwrap();
    assert_eq!(view.latest.len(), 8);
}
