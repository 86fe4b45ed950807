use serde::{Deserialize, Serialize};

/// A visitor review pending approval.
///
/// This is the only backend schema the client core depends on; course and
/// form payloads stay opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub rating: u8,
    pub comment: String,
}

impl Review {
    /// Rating clamped into the 0-5 band the star widget renders.
    pub fn display_rating(&self) -> u8 {
        self.rating.min(5)
    }
}
