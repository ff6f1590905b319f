mod common;

use axum::http::StatusCode;
use serde_json::json;
use shortlink::domain::entities::expiration::MAX_EXPIRATION_MINUTES;

#[tokio::test]
async fn test_shorten_first_url_returns_one() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com",
            "expiration_in_minutes": 60
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortlink"], "1");
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response1 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com", "expiration_in_minutes": 10 }))
        .await;
    let json1 = response1.json::<serde_json::Value>();

    let response2 = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com", "expiration_in_minutes": 10 }))
        .await;
    let json2 = response2.json::<serde_json::Value>();

    assert_eq!(json1["shortlink"], json2["shortlink"]);
}

#[tokio::test]
async fn test_shorten_distinct_urls() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let mut shortlinks = Vec::new();
    for url in ["https://a.com", "https://b.com", "https://c.com"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url, "expiration_in_minutes": 5 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        shortlinks.push(response.json::<serde_json::Value>()["shortlink"].clone());
    }

    assert_eq!(shortlinks, vec![json!("1"), json!("2"), json!("3")]);
}

#[tokio::test]
async fn test_shorten_expiration_defaults_to_never() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/info").add_query_param("shortlink", "1").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["ExpirationInMinutes"], 0);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url", "expiration_in_minutes": 60 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_negative_expiration() {
    let store = common::create_test_store();
    let state = common::create_test_state(store.clone());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expiration_in_minutes": -1 }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "expiration_in_minutes": 60 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_expiration_too_large() {
    let store = common::create_test_store();
    let state = common::create_test_state(store.clone());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expiration_in_minutes": i64::MAX / 60 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["max"], MAX_EXPIRATION_MINUTES);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_max_expiration_accepted() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expiration_in_minutes": MAX_EXPIRATION_MINUTES }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/info").add_query_param("shortlink", "1").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["ExpirationInMinutes"],
        MAX_EXPIRATION_MINUTES
    );
}

#[tokio::test]
async fn test_shorten_stores_normalized_url() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a\u{1}b" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.json::<serde_json::Value>()["shortlink"], "1");

    let response = server.get("/1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/a%01b");
}

#[tokio::test]
async fn test_shorten_dedups_equivalent_urls() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_test_server(state);

    let mut shortlinks = Vec::new();
    for url in ["https://example.com", "HTTPS://EXAMPLE.COM/"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url }))
            .await;
        shortlinks.push(response.json::<serde_json::Value>()["shortlink"].clone());
    }

    assert_eq!(shortlinks, vec![json!("1"), json!("1")]);
}

#[tokio::test]
async fn test_shorten_with_trailing_slash() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_app_server(state);

    let response = server
        .post("/api/shorten/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["shortlink"], "1");
}
