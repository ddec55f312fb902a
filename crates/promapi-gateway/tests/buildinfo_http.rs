#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use tower::ServiceExt;

use promapi_core::timestamp::format_timestamp;
use promapi_core::{RUNTIME_VERSION, TIMESTAMP_FORMAT};
use promapi_gateway::{app_state::AppState, config, router};

const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

fn app(binary_name: &str, binary_version: &str, binary_path: &str) -> Router {
    let yaml = format!(
        r#"
version: 1
buildinfo:
  binary_name: "{binary_name}"
  binary_version: "{binary_version}"
  binary_path: "{binary_path}"
"#
    );
    let cfg = config::load_from_str(&yaml).expect("config");
    router::build_router(AppState::new(cfg).expect("state"))
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn manifest_mtime() -> String {
    format_timestamp(std::fs::metadata(MANIFEST).unwrap().modified().unwrap())
}

#[tokio::test]
async fn frontend_scenario_matches_prometheus_shape() {
    let app = app("frontend", "v2.3.1", MANIFEST);
    let (status, v) = call(&app, "GET", "/api/v1/status/buildinfo").await;

    assert_eq!(status, StatusCode::OK);
    let expected = serde_json::json!({
        "status": "success",
        "data": {
            "version": "1.8.2",
            "revision": "gmp/frontend-v2.3.1",
            "branch": "HEAD",
            "buildUser": "gmp@localhost",
            "buildDate": manifest_mtime(),
            "goVersion": RUNTIME_VERSION,
        }
    });
    assert_eq!(v, expected);
}

#[tokio::test]
async fn revision_concatenates_name_and_version() {
    let pairs = [
        ("rule-evaluator", "0.12.0"),
        ("frontend", "v0.0.0-dev"),
        ("x", "y"),
    ];
    for (name, version) in pairs {
        let app = app(name, version, MANIFEST);
        let (status, v) = call(&app, "GET", "/api/v1/status/buildinfo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["revision"], format!("gmp/{name}-{version}"));
        assert_eq!(v["data"]["version"], "1.8.2");
        assert_eq!(v["data"]["branch"], "HEAD");
        assert_eq!(v["data"]["buildUser"], "gmp@localhost");
    }
}

#[tokio::test]
async fn any_method_and_query_is_ignored() {
    let app = app("frontend", "v1", MANIFEST);
    let (_, baseline) = call(&app, "GET", "/api/v1/status/buildinfo").await;

    for method in ["POST", "PUT", "DELETE"] {
        let (status, v) = call(&app, method, "/api/v1/status/buildinfo?foo=bar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v, baseline);
    }
}

#[tokio::test]
async fn repeated_requests_report_same_build_date() {
    let app = app("frontend", "v1", MANIFEST);
    let (_, first) = call(&app, "GET", "/api/v1/status/buildinfo").await;
    let (_, second) = call(&app, "GET", "/api/v1/status/buildinfo").await;
    assert_eq!(first["data"]["buildDate"], second["data"]["buildDate"]);
    assert_eq!(first["data"]["buildDate"], manifest_mtime());
}

#[tokio::test]
async fn missing_binary_still_succeeds_with_current_time() {
    let app = app("frontend", "v1", "/nonexistent/promapi-gateway");

    let before = Local::now().naive_local();
    let (status, v) = call(&app, "GET", "/api/v1/status/buildinfo").await;
    let after = Local::now().naive_local();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "success");
    let date = v["data"]["buildDate"].as_str().unwrap();
    let parsed = NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT).unwrap();
    assert!(parsed >= before - chrono::Duration::seconds(1));
    assert!(parsed <= after + chrono::Duration::seconds(1));
}

#[tokio::test]
async fn concurrent_requests_succeed() {
    let app = app("frontend", "v1", MANIFEST);

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { call(&app, "GET", "/api/v1/status/buildinfo").await })
        })
        .collect();

    for handle in handles {
        let (status, v) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["data"]["revision"], "gmp/frontend-v1");
    }
}

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let app = app("frontend", "v1", MANIFEST);
    let (status, v) = call(&app, "GET", "/api/v1/query").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["status"], "error");
    assert_eq!(v["errorType"], "not_found");
    assert_eq!(v["error"], "not found: /api/v1/query");
}

#[tokio::test]
async fn metrics_count_buildinfo_responses() {
    let app = app("frontend", "v1", MANIFEST);
    call(&app, "GET", "/api/v1/status/buildinfo").await;
    call(&app, "GET", "/api/v1/status/buildinfo").await;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(
        "promapi_api_responses_total{path=\"/api/v1/status/buildinfo\",status=\"200\"} 2"
    ));
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = app("frontend", "v1", MANIFEST);
    let resp = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
