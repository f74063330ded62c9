use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a human readable place description with the identifier used to fetch its details
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaceSuggestion {
    pub description: String,
    pub place_id: String,
}

impl Display for PlaceSuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.place_id)
    }
}
