use serde::{Deserialize, Serialize};

/// Output of one query submission cycle. The raw backend narratives are kept
/// unmodified; structured fields are re-derived from them on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub weather_text: Option<String>,
    pub places_text: Option<String>,
    pub place_name: String,
}

impl QueryResult {
    // "Empty" is its own terminal condition, distinct from transport errors.
    pub fn is_empty(&self) -> bool {
        self.weather_text.is_none() && self.places_text.is_none()
    }
}
