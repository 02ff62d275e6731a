#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use futures_util::future::join_all;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

use dawdle_server::{app_state::AppState, greet, obs, router};

// The recorder can only be installed once per process; every test app
// shares it through this handle.
static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

fn app() -> Router {
    let handle =
        RECORDER.get_or_init(|| obs::metrics::install_recorder().expect("recorder install"));
    router::build_router(AppState::new(handle.clone()))
}

async fn send(req: Request<Body>) -> (StatusCode, String) {
    let res = app().oneshot(req).await.expect("infallible");
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn greeting_on_root() {
    let (status, body) = send(Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, greet::GREETING);
}

#[tokio::test]
async fn greeting_ignores_method_path_and_body() {
    let reqs = [
        Request::builder()
            .method("POST")
            .uri("/anything/at/all?q=1")
            .body(Body::from("ignored payload"))
            .unwrap(),
        Request::builder()
            .method("DELETE")
            .uri("/metricz")
            .header("x-unusual", "header")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("PUT")
            .uri("/")
            .body(Body::empty())
            .unwrap(),
    ];
    for req in reqs {
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World\n");
    }
}

#[tokio::test]
async fn greeting_body_is_idempotent() {
    let (_, first) = send(Request::builder().uri("/x").body(Body::empty()).unwrap()).await;
    let (_, second) = send(Request::builder().uri("/x").body(Body::empty()).unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn greeting_completes_within_coarse_bound() {
    // The artificial delay is < 100ms; 2s is a generous ceiling that
    // still catches a handler stuck on a non-expiring sleep.
    let start = Instant::now();
    let (status, _) = send(Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn metrics_exposes_latency_series_after_traffic() {
    let (status, _) = send(Request::builder().uri("/warmup").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
    assert!(body.contains("http_request_duration_seconds"), "got: {body}");
    assert!(body.contains("handler=\"hello_world\""), "got: {body}");
    assert!(body.contains("http_requests_total"), "got: {body}");
}

#[tokio::test]
async fn metrics_answers_any_method() {
    for method in ["POST", "PUT", "DELETE", "HEAD"] {
        let (status, _) = send(
            Request::builder()
                .method(method)
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "method {method}");
    }
}

#[tokio::test]
async fn metrics_scrape_is_always_valid() {
    // May run before or after greeting traffic in this process; either
    // way the scrape must be 200 with parseable exposition lines.
    let (status, body) = send(
        Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    for line in body.lines() {
        assert!(
            line.is_empty() || line.starts_with('#') || line.rsplit_once(' ').is_some(),
            "unparseable line: {line}"
        );
    }
}

#[tokio::test]
async fn concurrent_greetings_all_complete() {
    let results = join_all((0..16).map(|i| {
        send(
            Request::builder()
                .uri(format!("/burst/{i}"))
                .body(Body::empty())
                .unwrap(),
        )
    }))
    .await;

    assert_eq!(results.len(), 16);
    for (status, body) in results {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, greet::GREETING);
    }
}
