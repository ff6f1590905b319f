//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span, field};

type RequestSpanFn = fn(&Request<Body>) -> Span;
type ResponseFn = fn(&Response<Body>, Duration, &Span);

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying the method and path; the status
/// and latency are recorded on it when the response is produced, and a
/// single line is logged:
///
/// ```text
/// INFO request{method=POST path=/api/shorten status=201 latency_ms=2}: finished
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpanFn, (), ResponseFn>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as RequestSpanFn)
        .on_request(())
        .on_response(on_response as ResponseFn)
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::span!(
        Level::INFO,
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        status = field::Empty,
        latency_ms = field::Empty,
    )
}

fn on_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status", response.status().as_u16());
    span.record("latency_ms", latency.as_millis() as u64);
    tracing::info!("finished");
}
