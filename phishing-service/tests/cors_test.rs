mod common;

use common::TestApp;
use reqwest::Method;

#[tokio::test]
async fn preflight_allows_any_origin_with_credentials() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .request(Method::OPTIONS, format!("{}/predict", app.address))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
}

#[tokio::test]
async fn cross_origin_predict_is_answered() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(format!("{}/predict", app.address))
        .header("origin", "https://mail.example.org")
        .json(&serde_json::json!({"sender": "a@b.com", "subject": "Hi", "content": "hello"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://mail.example.org"
    );
    assert_eq!(
        response.headers()["access-control-allow-credentials"],
        "true"
    );
}
