mod health_tests;
mod pages_tests;

use axum::Router;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pagebar::config::Config;
use pagebar::state::AppState;

/// Build a Config from a TOML snippet.
pub fn test_config(toml_str: &str) -> Config {
    toml::from_str(toml_str).expect("test config should parse")
}

/// Build a full Router from a Config.
pub fn test_router(config: Config) -> Router {
    pagebar::build_router(AppState::new(config))
}

/// Send a GET request and return the response.
pub async fn get(app: Router, path: &str) -> axum::response::Response {
    let req = axum::http::Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

/// Collect a response body as a string.
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).expect("body should be JSON")
}
