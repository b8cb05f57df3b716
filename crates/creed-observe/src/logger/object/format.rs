use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::logger::LoggerError;

/// Where log lines go and how they look.
///
/// `Text` is meant for terminals, `Json` for collectors.
/// `Journald` writes to systemd-journald and only parses on Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum LoggerFormat {
    #[default]
    Text,
    Json,
    Journald,
}

impl LoggerFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Journald => "journald",
        }
    }

    fn journald() -> Result<Self, LoggerError> {
        if cfg!(target_os = "linux") {
            Ok(Self::Journald)
        } else {
            Err(LoggerError::JournaldNotSupported)
        }
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        if name.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if name.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if name.eq_ignore_ascii_case("journald") || name.eq_ignore_ascii_case("journal") {
            Self::journald()
        } else {
            Err(LoggerError::InvalidFormat(raw.to_owned()))
        }
    }
}

impl TryFrom<String> for LoggerFormat {
    type Error = LoggerError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<LoggerFormat> for String {
    fn from(format: LoggerFormat) -> Self {
        format.as_str().to_owned()
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!(LoggerFormat::from_str("TEXT").unwrap(), LoggerFormat::Text);
        assert_eq!(LoggerFormat::from_str(" json ").unwrap(), LoggerFormat::Json);
    }

    #[test]
    fn journald_depends_on_platform() {
        let parsed = LoggerFormat::from_str("journald");
        if cfg!(target_os = "linux") {
            assert_eq!(parsed.unwrap(), LoggerFormat::Journald);
        } else {
            assert!(matches!(parsed, Err(LoggerError::JournaldNotSupported)));
        }
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "logfmt"] {
            assert!(
                LoggerFormat::from_str(input).is_err(),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&LoggerFormat::Json).unwrap(), r#""json""#);
        let parsed: LoggerFormat = serde_json::from_str(r#""Text""#).unwrap();
        assert_eq!(parsed, LoggerFormat::Text);
    }
}
