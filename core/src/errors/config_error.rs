// core/src/errors/config_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config read error: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error")]
    Parse(#[source] anyhow::Error),

    #[error("missing required settings: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("case id pattern invalid: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("env var invalid: {key}")]
    EnvInvalid {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}
