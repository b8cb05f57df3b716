//! Process configuration read from `CREED_*` environment variables.
use std::{env::VarError, fmt::Display, str::FromStr};

use creed_model::LabelStyle;
use creed_observe::{LoggerConfig, LoggerTimeZone};
use creed_render::RendererKind;
use thiserror::Error;

pub const ENV_HOST: &str = "CREED_HOST";
pub const ENV_PORT: &str = "CREED_PORT";
pub const ENV_RENDERER: &str = "CREED_RENDERER";
pub const ENV_LABEL_STYLE: &str = "CREED_LABEL_STYLE";
pub const ENV_LOG_FORMAT: &str = "CREED_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "CREED_LOG_LEVEL";
pub const ENV_LOG_TZ: &str = "CREED_LOG_TZ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Listener address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl HttpConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Presentation choices fixed for the life of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartConfig {
    pub renderer: RendererKind,
    pub label_style: LabelStyle,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub chart: ChartConfig,
    pub logger: LoggerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Read configuration through `lookup`; unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let defaults = HttpConfig::default();
        let http = HttpConfig {
            host: read(&lookup, ENV_HOST)?.unwrap_or(defaults.host),
            port: parse(&lookup, ENV_PORT)?.unwrap_or(defaults.port),
        };

        let chart = ChartConfig {
            renderer: parse(&lookup, ENV_RENDERER)?.unwrap_or_default(),
            label_style: parse(&lookup, ENV_LABEL_STYLE)?.unwrap_or_default(),
        };

        let base = LoggerConfig::default();
        let logger = LoggerConfig {
            format: parse(&lookup, ENV_LOG_FORMAT)?.unwrap_or(base.format),
            level: parse(&lookup, ENV_LOG_LEVEL)?.unwrap_or(base.level),
            tz: parse(&lookup, ENV_LOG_TZ)?.unwrap_or(LoggerTimeZone::Local),
            ..base
        };

        Ok(Self {
            http,
            chart,
            logger,
        })
    }
}

fn read<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
    }
}

fn parse<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: Display,
{
    read(lookup, var)?
        .map(|raw| {
            raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })
        })
        .transpose()
}
