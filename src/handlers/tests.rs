// ---------------------------------------------------------------------------
// handlers/tests.rs — Unit tests for error mapping and handler output
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use super::*;
use crate::request_info::RequestInfo;
use crate::state::AppState;
use crate::system_info::HostProbe;
use crate::uptime::Clock;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FakeHost;

impl HostProbe for FakeHost {
    fn hostname(&self) -> Option<String> {
        Some("build-agent-7".to_string())
    }
    fn platform(&self) -> String {
        "linux".to_string()
    }
    fn long_platform_version(&self) -> Option<String> {
        Some("Linux (Ubuntu 24.04)".to_string())
    }
    fn architecture(&self) -> String {
        "aarch64".to_string()
    }
    fn cpu_count(&self) -> Option<usize> {
        Some(8)
    }
    fn rust_version(&self) -> Option<String> {
        Some("1.85.0".to_string())
    }
}

fn pinned_state(elapsed_secs: i64) -> AppState {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    AppState::with_parts(
        start,
        Arc::new(FixedClock(start + Duration::seconds(elapsed_secs))),
        Arc::new(FakeHost),
    )
}

fn get_root() -> RequestInfo {
    RequestInfo {
        client_ip: "127.0.0.1".to_string(),
        user_agent: "unknown".to_string(),
        method: "GET".to_string(),
        path: "/".to_string(),
    }
}

async fn error_json(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_body() {
    let (status, json) = error_json(AppError::NotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "Endpoint does not exist");
}

#[tokio::test]
async fn test_internal_error_does_not_leak_cause() {
    let (status, json) = error_json(AppError::Internal("db password is hunter2".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(json["message"], "An unexpected error occurred");
    assert!(!json.to_string().contains("hunter2"));
}

#[tokio::test]
async fn test_handle_panic_maps_to_500() {
    let response = handle_panic(Box::new("boom"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "Internal Server Error");
    assert!(!json.to_string().contains("boom"));
}

#[tokio::test]
async fn test_index_uses_injected_clock_and_host() {
    let Json(body) = index(State(pinned_state(3_725)), get_root()).await;

    assert_eq!(body.service.name, "devops-info-service");
    assert_eq!(body.service.framework, "Axum");
    assert_eq!(body.system.hostname, "build-agent-7");
    assert_eq!(body.system.cpu_count, 8);
    assert_eq!(body.system.platform_version, "Linux (Ubuntu 24.04)");
    assert_eq!(body.runtime.uptime_seconds, 3_725);
    assert_eq!(body.runtime.uptime_human, "1 hour, 2 minutes");
    assert_eq!(body.runtime.current_time, "2024-05-01T09:02:05.000Z");
    assert_eq!(body.runtime.timezone, "UTC");
    assert_eq!(body.request, get_root());
    assert_eq!(body.endpoints.len(), 2);
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let Json(body) = health(State(pinned_state(42))).await;
    assert_eq!(body.status, "healthy");
    assert_eq!(body.uptime_seconds, 42);
    assert_eq!(body.timestamp, "2024-05-01T08:00:42.000Z");
}
