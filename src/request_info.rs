// devops-info-service - Per-request client context

use std::convert::Infallible;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use serde::Serialize;
use utoipa::ToSchema;

const UNKNOWN: &str = "unknown";
const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Who asked and how. Extraction never fails; missing pieces become
/// `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl<S> FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self {
            client_ip: client_ip(&parts.headers, peer),
            user_agent: user_agent(&parts.headers),
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
        })
    }
}

/// Proxy headers win over the socket peer: first non-empty hop of
/// `X-Forwarded-For`, then `X-Real-IP`, then the connection's remote address.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = header_str(headers, X_FORWARDED_FOR)
        .and_then(|v| v.split(',').map(str::trim).find(|hop| !hop.is_empty()));
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    if let Some(ip) = header_str(headers, X_REAL_IP).map(str::trim).filter(|v| !v.is_empty()) {
        return ip.to_string();
    }

    match peer.map(|addr| addr.ip()) {
        Some(ip) if ip.is_loopback() && ip.is_ipv6() => IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
        Some(ip) => ip.to_string(),
        None => UNKNOWN.to_string(),
    }
}

pub fn user_agent(headers: &HeaderMap) -> String {
    header_str(headers, header::USER_AGENT.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
