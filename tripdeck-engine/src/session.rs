use serde::{Deserialize, Serialize};
use tripdeck_core::types::QueryResult;

/// Lifecycle of one query. Exactly one of these is live per controller; a new
/// submission replaces whatever was here before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    InFlight,
    Success(QueryResult),
    Error(String),
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SessionState {
    // A stable string label for UI display.
    // This is intentionally not derived from `Debug`.
    pub fn stage_label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight => "in_flight",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    /// Terminal states are the only ones a result is rendered from.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}
