use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use shortlink::api::middleware::recover;

async fn panicking_handler() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let router = Router::new()
        .route("/boom", get(panicking_handler))
        .route("/ok", get(|| async { "ok" }))
        .layer(recover::layer());
    let server = TestServer::new(router).unwrap();

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");

    // The server keeps serving after the panic
    server.get("/ok").await.assert_status_ok();
}
