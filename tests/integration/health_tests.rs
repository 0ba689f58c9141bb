use super::*;

#[tokio::test]
async fn health_reports_version() {
    let app = test_router(Config::default());
    let response = get(app, "/health").await;
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = test_router(Config::default());
    let response = get(app, "/api/nope").await;
    assert_eq!(response.status(), 404);
}
