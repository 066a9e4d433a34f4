use crate::request::{Body, HttpRequest};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

/// One submission is exactly one of these requests; the caller is expected to
/// have trimmed the query already.
pub fn build_query_request(cfg: &BackendConfig, query: &str) -> HttpRequest {
    let url = join_url(&cfg.base_url, "/api/query");

    let payload = json!({ "query": query });

    HttpRequest {
        method: "POST".into(),
        url,
        headers: vec![
            ("Content-Type".into(), "application/json".into()),
            ("Accept".into(), "application/json".into()),
        ],
        body: Body::Json(payload.to_string()),
    }
}

/// Reachability probe against the service's health endpoint.
pub fn build_health_request(cfg: &BackendConfig) -> HttpRequest {
    HttpRequest {
        method: "GET".into(),
        url: join_url(&cfg.base_url, "/api/health"),
        headers: vec![("Accept".into(), "application/json".into())],
        body: Body::Empty,
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("https://api.example.com/", "/api/query"),
            "https://api.example.com/api/query"
        );
        assert_eq!(
            join_url("https://api.example.com", "api/query"),
            "https://api.example.com/api/query"
        );
    }

    #[test]
    fn builds_json_query_request() {
        let cfg = BackendConfig {
            base_url: "https://travel.example.com/".into(),
        };
        let req = build_query_request(&cfg, "weather in Delhi");

        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "https://travel.example.com/api/query");
        assert_eq!(req.header("content-type"), Some("application/json"));
        match req.body {
            Body::Json(s) => {
                let v: serde_json::Value = serde_json::from_str(&s).unwrap();
                assert_eq!(v["query"], "weather in Delhi");
            }
            _ => panic!("expected json"),
        }
    }

    #[test]
    fn builds_health_probe() {
        let cfg = BackendConfig {
            base_url: "https://travel.example.com".into(),
        };
        let req = build_health_request(&cfg);
        assert_eq!(req.method, "GET");
        assert!(req.url.ends_with("/api/health"));
        assert_eq!(req.body, Body::Empty);
    }
}
