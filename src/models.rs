use serde::Serialize;
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Service metadata
// ---------------------------------------------------------------------------

pub const SERVICE_NAME: &str = "devops-info-service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";
pub const SERVICE_FRAMEWORK: &str = "Axum";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub framework: String,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            framework: SERVICE_FRAMEWORK.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    /// RFC 3339, always UTC.
    pub current_time: String,
    pub timezone: String,
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Routes served by this process, as advertised by `GET /`.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("/", "GET", "Service information"),
    ("/health", "GET", "Health check"),
];

pub fn endpoints() -> Vec<EndpointInfo> {
    ENDPOINTS
        .iter()
        .map(|(path, method, description)| EndpointInfo {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IndexResponse {
    pub service: ServiceInfo,
    pub system: crate::system_info::SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: crate::request_info::RequestInfo,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
