use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Budget, ModelError};

/// How a segment's display label is composed.
/// - `Bare`: the task name only; the budget stays in tooltip data.
/// - `WithBudget`: `"<task> (<budget>)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Task name only (default).
    #[default]
    Bare,
    /// Task name followed by the budget in parentheses.
    WithBudget,
}

impl LabelStyle {
    /// Compose the display label for a milestone.
    pub fn compose(&self, task: &str, budget: &Budget) -> String {
        match self {
            LabelStyle::Bare => task.to_string(),
            LabelStyle::WithBudget => format!("{task} ({budget})"),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bare" | "task" => Ok(Self::Bare),
            "with-budget" | "budget" => Ok(Self::WithBudget),
            _ => Err(ModelError::UnknownLabelStyle(s.to_string())),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabelStyle::Bare => "bare",
            LabelStyle::WithBudget => "with-budget",
        };
        f.write_str(s)
    }
}

impl Serialize for LabelStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LabelStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bare() {
        assert_eq!(LabelStyle::default(), LabelStyle::Bare);
    }

    #[test]
    fn composes_labels() {
        let budget = Budget::new("$120");

        assert_eq!(LabelStyle::Bare.compose("Engine", &budget), "Engine");
        assert_eq!(
            LabelStyle::WithBudget.compose("Engine", &budget),
            "Engine ($120)"
        );
    }

    #[test]
    fn parses_case_insensitive() {
        assert_eq!(LabelStyle::from_str("BARE").unwrap(), LabelStyle::Bare);
        assert_eq!(
            LabelStyle::from_str(" With-Budget ").unwrap(),
            LabelStyle::WithBudget
        );
        assert_eq!(
            LabelStyle::from_str("budget").unwrap(),
            LabelStyle::WithBudget
        );
    }

    #[test]
    fn rejects_unknown_style() {
        for bad in ["", "fancy", "with_budget"] {
            assert!(
                LabelStyle::from_str(bad).is_err(),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for style in [LabelStyle::Bare, LabelStyle::WithBudget] {
            assert_eq!(LabelStyle::from_str(&style.to_string()).unwrap(), style);
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&LabelStyle::WithBudget).unwrap();
        assert_eq!(json, r#""with-budget""#);

        let parsed: LabelStyle = serde_json::from_str(r#""Bare""#).unwrap();
        assert_eq!(parsed, LabelStyle::Bare);
    }
}
