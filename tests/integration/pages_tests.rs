use super::*;

fn numbers(json: &serde_json::Value) -> Vec<Option<u64>> {
    json["pages"]
        .as_array()
        .expect("pages should be an array")
        .iter()
        .map(|m| m["number"].as_u64())
        .collect()
}

#[tokio::test]
async fn middle_window_with_navigation() {
    let app = test_router(Config::default());
    let response = get(
        app,
        "/api/pages?base_url=%2Fbooks%3Flang%3Den&current_page=10&total_pages=20",
    )
    .await;
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(
        numbers(&json),
        vec![
            Some(1),
            Some(2),
            None,
            Some(9),
            Some(10),
            Some(11),
            None,
            Some(20)
        ]
    );
    assert_eq!(json["current_page"], 10);
    assert_eq!(json["total_pages"], 20);
    assert_eq!(json["pages"][0]["url"], "/books?lang=en&page=1");
    assert_eq!(json["pages"][2]["url"], serde_json::Value::Null);
    assert_eq!(json["navigation"]["previous_page_number"], 9);
    assert_eq!(json["navigation"]["next_page_number"], 11);
    assert_eq!(json["navigation"]["previous_button_url"], "/books?lang=en&page=9");
    assert_eq!(json["navigation"]["next_button_url"], "/books?lang=en&page=11");
}

#[tokio::test]
async fn config_defaults_apply() {
    let config = test_config(
        r#"
[pagination]
max_page_buttons = 3
page_url_key = "p"
"#,
    );
    let app = test_router(config);
    let response = get(app, "/api/pages?base_url=%2Fl&current_page=1&total_pages=9").await;
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(numbers(&json), vec![Some(1), Some(2), Some(3), None, Some(9)]);
    assert_eq!(json["pages"][4]["url"], "/l?p=9");
    assert_eq!(json["navigation"]["previous_button_url"], serde_json::Value::Null);
}

#[tokio::test]
async fn query_overrides_config() {
    let app = test_router(Config::default());
    let response = get(
        app,
        "/api/pages?base_url=%2Fl&current_page=6&total_pages=6&max_page_buttons=10&page_url_key=n",
    )
    .await;
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(
        numbers(&json),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]
    );
    assert_eq!(json["pages"][5]["url"], "/l?n=6");
    assert_eq!(json["navigation"]["next_page_number"], serde_json::Value::Null);
    assert_eq!(json["navigation"]["next_button_url"], serde_json::Value::Null);
}

#[tokio::test]
async fn current_page_beyond_total_is_rejected() {
    let app = test_router(Config::default());
    let response = get(app, "/api/pages?base_url=%2Fl&current_page=8&total_pages=4").await;
    assert_eq!(response.status(), 400);
    let body = body_string(response).await;
    assert!(body.contains("current_page"), "unexpected body: {body}");
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let app = test_router(Config::default());
    let response = get(app, "/api/pages?current_page=1").await;
    assert_eq!(response.status(), 400);

    let app = test_router(Config::default());
    let response = get(app, "/api/pages?base_url=%2Fl&current_page=one&total_pages=4").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn oversized_button_count_is_rejected() {
    let app = test_router(Config::default());
    let response = get(
        app,
        "/api/pages?base_url=%2Fl&current_page=1&total_pages=4000000000&max_page_buttons=4000000000",
    )
    .await;
    assert_eq!(response.status(), 400);
    let body = body_string(response).await;
    assert!(body.contains("max_page_buttons"), "unexpected body: {body}");
}

#[tokio::test]
async fn last_page_at_integer_limit() {
    let app = test_router(Config::default());
    let response = get(
        app,
        "/api/pages?base_url=%2Fl&current_page=4294967295&total_pages=4294967295",
    )
    .await;
    assert_eq!(response.status(), 200);

    let json = body_json(response).await;
    assert_eq!(
        numbers(&json),
        vec![
            Some(1),
            Some(2),
            None,
            Some(4294967292),
            Some(4294967293),
            Some(4294967294),
            Some(4294967295)
        ]
    );
    assert_eq!(json["navigation"]["next_button_url"], serde_json::Value::Null);
}
