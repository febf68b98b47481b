use serde::{Deserialize, Serialize};

/// A single quotation with its attributed author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub message: String,
    pub author: String,
}

impl Quote {
    pub fn new(message: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: author.into(),
        }
    }
}
