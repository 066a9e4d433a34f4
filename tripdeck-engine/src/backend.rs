use crate::traits::{BackendError, QueryBackend};
use async_trait::async_trait;
use tripdeck_providers::backend::{BackendConfig, build_health_request, build_query_request};
use tripdeck_providers::parse::{self, QueryResponse};
use tripdeck_providers::runtime;

/// `QueryBackend` wired to the real service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQueryBackend {
    cfg: BackendConfig,
}

impl HttpQueryBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            cfg: BackendConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Checks whether the service is up at all. Not part of the submission
    /// path; useful at startup or for a connectivity indicator.
    pub async fn health(&self) -> Result<bool, BackendError> {
        let req = build_health_request(&self.cfg);
        let resp = runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(BackendError::Status {
                status: resp.status,
                detail: parse::error_detail(&resp.body),
            });
        }

        Ok(parse::parse_health_response(&resp.body)?)
    }
}

#[async_trait]
impl QueryBackend for HttpQueryBackend {
    async fn query(&self, query: &str) -> Result<QueryResponse, BackendError> {
        let req = build_query_request(&self.cfg, query);
        let resp = runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(BackendError::Status {
                status: resp.status,
                detail: parse::error_detail(&resp.body),
            });
        }

        Ok(parse::parse_query_response(&resp.body)?)
    }
}
