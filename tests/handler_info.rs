mod common;

use axum::{Router, routing::get};
use serde_json::json;
use shortlink::api::handlers::info_handler;

use common::EXAMPLE_URL;

fn info_router() -> Router<shortlink::AppState> {
    Router::new().route("/api/info", get(info_handler))
}

#[tokio::test]
async fn test_info_success() {
    let store = common::create_test_store();
    let state = common::create_test_state(store);
    let id = state.link_service.shorten(EXAMPLE_URL, 60).await.unwrap();

    let server = common::create_handler_server(info_router(), state);

    let response = server.get("/api/info").add_query_param("shortlink", &id).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["URL"], EXAMPLE_URL);
    assert_eq!(json["ExpirationInMinutes"], 60);
    assert!(json["CreatedAt"].is_string());
}

#[tokio::test]
async fn test_info_unknown_shortlink() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_handler_server(info_router(), state);

    let response = server
        .get("/api/info")
        .add_query_param("shortlink", "doesNotExist")
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "unknown short link");
    assert_eq!(json["error"]["details"], json!({ "shortlink": "doesNotExist" }));
}

#[tokio::test]
async fn test_info_missing_parameter() {
    let state = common::create_test_state(common::create_test_store());
    let server = common::create_handler_server(info_router(), state);

    let response = server.get("/api/info").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_info_malformed_record_is_internal_error() {
    use shortlink::domain::keys::short_link_detail_key;
    use shortlink::domain::repositories::KvStore;

    let store = common::create_test_store();
    store
        .set(&short_link_detail_key("abc"), "garbage", None)
        .await
        .unwrap();
    let state = common::create_test_state(store);
    let server = common::create_handler_server(info_router(), state);

    let response = server.get("/api/info").add_query_param("shortlink", "abc").await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");
}
