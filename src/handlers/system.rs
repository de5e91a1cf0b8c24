// ---------------------------------------------------------------------------
// handlers/system.rs — Service information and health
// ---------------------------------------------------------------------------

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{self, HealthResponse, IndexResponse, RuntimeInfo, ServiceInfo};
use crate::request_info::RequestInfo;
use crate::state::AppState;
use crate::system_info::SystemInfo;

const TIMEZONE: &str = "UTC";

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[utoipa::path(get, path = "/", tag = "info",
    responses((status = 200, description = "Service, host, runtime and request information", body = IndexResponse))
)]
pub async fn index(State(state): State<AppState>, request: RequestInfo) -> Json<IndexResponse> {
    tracing::info!("Request: {} {}", request.method, request.path);

    let now = state.now();
    let uptime = state.uptime_at(now);

    Json(IndexResponse {
        service: ServiceInfo::current(),
        system: SystemInfo::collect(state.host.as_ref()),
        runtime: RuntimeInfo {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human,
            current_time: timestamp(now),
            timezone: TIMEZONE.to_string(),
        },
        request,
        endpoints: models::endpoints(),
    })
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe. No locks, no host queries.
#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = state.now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp(now),
        uptime_seconds: state.uptime_at(now).seconds,
    })
}
