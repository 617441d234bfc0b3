use serde::Serialize;

/// Outcome of one fetch.
///
/// `found` is true only when `description` holds non-empty, trimmed text;
/// otherwise `description` is empty.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FetchResult {
    description: String,
    found: bool,
}

impl FetchResult {
    /// Build a result from raw element text. Whitespace-only text counts as not found.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::not_found();
        }
        Self {
            description: trimmed.to_string(),
            found: true,
        }
    }

    pub fn not_found() -> Self {
        Self {
            description: String::new(),
            found: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn found(&self) -> bool {
        self.found
    }
}
