mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::EXAMPLE_URL;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": EXAMPLE_URL, "expiration_in_minutes": 60 }))
        .await;
    let shortlink = created.json::<serde_json::Value>()["shortlink"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(shortlink, "1");

    let response = server.get(&format!("/{shortlink}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), EXAMPLE_URL);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_rejects_malformed_identifier() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    // 12 characters, one past the longest identifier.
    server.get("/doesNotExist").await.assert_status_not_found();
    server.get("/bad-code").await.assert_status_not_found();
}

#[tokio::test(start_paused = true)]
async fn test_redirect_after_expiration() {
    let state = common::create_test_state(common::create_test_store());
    let id = state.link_service.shorten(EXAMPLE_URL, 1).await.unwrap();
    let server = common::create_test_server(state);

    server
        .get(&format!("/{id}"))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    tokio::time::advance(std::time::Duration::from_secs(60)).await;

    server.get(&format!("/{id}")).await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_unsendable_stored_url() {
    use shortlink::domain::keys::short_link_url_key;
    use shortlink::domain::repositories::KvStore;

    let store = common::create_test_store();
    store
        .set(&short_link_url_key("1"), "https://example.com/a\u{1}b", None)
        .await
        .unwrap();
    let server = common::create_test_server(common::create_test_state(store));

    let response = server.get("/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let state = common::create_test_state(common::create_test_store());
    let id = state.link_service.shorten(EXAMPLE_URL, 0).await.unwrap();
    let server = common::create_app_server(state);

    let response = server.get(&format!("/{id}/")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), EXAMPLE_URL);
}
