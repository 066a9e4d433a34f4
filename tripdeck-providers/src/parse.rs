use anyhow::Context;
use serde::Deserialize;

/// Successful response contract for `/api/query`. All fields are optional;
/// whether the answer is usable at all is the session layer's call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    pub weather: Option<String>,
    pub places: Option<String>,
    pub place_name: Option<String>,
}

pub fn parse_query_response(body: &[u8]) -> anyhow::Result<QueryResponse> {
    serde_json::from_slice(body).context("decode query response JSON")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Best-effort extraction of the `detail` field from a non-2xx body.
///
/// Error bodies are not guaranteed to be JSON, or to carry a detail at all, so
/// this never fails; it just yields nothing.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed.detail.filter(|d| !d.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

pub fn parse_health_response(body: &[u8]) -> anyhow::Result<bool> {
    let resp: HealthBody = serde_json::from_slice(body).context("decode health JSON")?;
    Ok(resp.status == "healthy")
}
