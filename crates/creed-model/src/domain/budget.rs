use std::fmt;

use serde::{Deserialize, Serialize};

/// Currency-formatted budget figure (e.g. `"$120"`).
///
/// Kept as display text: nothing in the timeline does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(String);

impl Budget {
    /// Create a budget from display text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the display text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Budget {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Budget;

    #[test]
    fn display_is_raw_text() {
        assert_eq!(Budget::new("$80").to_string(), "$80");
    }

    #[test]
    fn blank_detection() {
        assert!(Budget::new("").is_blank());
        assert!(Budget::new("   ").is_blank());
        assert!(!Budget::new("$0").is_blank());
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&Budget::new("$150")).unwrap();
        assert_eq!(json, r#""$150""#);
    }
}
