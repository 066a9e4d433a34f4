use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::SessionState;
use crate::traits::{BackendError, QueryBackend};
use tripdeck_core::types::QueryResult;
use tripdeck_providers::parse::QueryResponse;

pub const EMPTY_RESULT_MESSAGE: &str =
    "Could not find information for this location. Please try another place.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Default)]
struct Inner {
    state: SessionState,
    // Bumped on every accepted submission; a response only applies if its
    // submission still owns this number when it lands.
    seq: u64,
}

/// Owns one query's lifecycle against the remote service.
///
/// All mutation goes through the single `Inner` cell; the network round trip
/// suspends without holding the lock, so a later `submit` can supersede an
/// earlier one while it is in flight.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Mutex<Inner>>,
    backend: Arc<dyn QueryBackend>,
}

impl SessionController {
    pub fn new(backend: Arc<dyn QueryBackend>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            backend,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// Runs one submission to a terminal state and returns it.
    ///
    /// A blank query is ignored entirely: no transition, no network call. If a
    /// later submission starts while this one is in flight, this one's
    /// response is dropped at resolution time whatever order the two land in,
    /// and the session reflects only the later outcome.
    pub async fn submit(&self, query_text: &str) -> SessionState {
        let query = query_text.trim();
        if query.is_empty() {
            return self.state().await;
        }

        let seq = {
            let mut inner = self.inner.lock().await;
            inner.seq = inner.seq.wrapping_add(1);
            inner.state = SessionState::InFlight;
            inner.seq
        };
        log::info!("query #{seq} submitted");

        let outcome = self.backend.query(query).await;

        let mut inner = self.inner.lock().await;
        if inner.seq != seq {
            log::debug!(
                "query #{seq} superseded by #{}; response dropped",
                inner.seq
            );
            return inner.state.clone();
        }

        inner.state = resolve(query, outcome);
        log::info!("query #{seq} resolved: {}", inner.state.stage_label());
        inner.state.clone()
    }
}

fn resolve(query: &str, outcome: Result<QueryResponse, BackendError>) -> SessionState {
    let resp = match outcome {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("query failed: {err}");
            let message = match err {
                BackendError::Status {
                    detail: Some(detail),
                    ..
                } => detail,
                _ => GENERIC_ERROR_MESSAGE.into(),
            };
            return SessionState::Error(message);
        }
    };

    let weather_text = non_empty(resp.weather);
    let places_text = non_empty(resp.places);

    if weather_text.is_none() && places_text.is_none() {
        // The service answered but had nothing usable. Surfaced as a fixed
        // user-facing message, not as a system error.
        return SessionState::Error(EMPTY_RESULT_MESSAGE.into());
    }

    let place_name = non_empty(resp.place_name).unwrap_or_else(|| query.to_string());
    SessionState::Success(QueryResult {
        weather_text,
        places_text,
        place_name,
    })
}

// An empty string from the service carries nothing renderable; treat it the
// same as an absent field.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
