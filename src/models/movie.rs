use serde::{Deserialize, Serialize};

/// One entry of the top-movies chart.
///
/// `title` is `(classification, full_title)` and serializes as a two-element
/// JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: (String, String),
    pub rating: String,
}

impl MovieRecord {
    pub fn new(
        classification: impl Into<String>,
        full_title: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            title: (classification.into(), full_title.into()),
            rating: rating.into(),
        }
    }

    pub fn classification(&self) -> &str {
        &self.title.0
    }

    pub fn full_title(&self) -> &str {
        &self.title.1
    }
}
