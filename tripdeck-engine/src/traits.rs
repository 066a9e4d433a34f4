use async_trait::async_trait;
use thiserror::Error;
use tripdeck_providers::parse::QueryResponse;

#[derive(Debug, Error)]
pub enum BackendError {
    // Non-2xx, with whatever the service put in its error body.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// One round trip to the travel service. Implementations are read-only, so an
/// abandoned in-flight call is safe to ignore.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn query(&self, query: &str) -> Result<QueryResponse, BackendError>;
}
