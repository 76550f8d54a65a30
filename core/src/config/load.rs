use std::path::Path;

use super::types::SyncConfig;
use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "railsync.toml";

/// Loads `railsync.toml` from the working directory when present.
pub fn load_default() -> Result<SyncConfig, ConfigError> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        load(Some(default_path))
    } else {
        load(None)
    }
}

pub fn load(path: Option<&Path>) -> Result<SyncConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            let s = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                path: p.display().to_string(),
                source,
            })?;
            toml::from_str::<SyncConfig>(&s).map_err(|e| ConfigError::Parse(e.into()))?
        }
        None => SyncConfig::default(),
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut SyncConfig, get: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| get(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank("RAILSYNC_BASE_URL") {
        cfg.base_url = v;
    }
    if let Some(v) = non_blank("RAILSYNC_USERNAME") {
        cfg.username = v;
    }
    if let Some(v) = non_blank("RAILSYNC_PASSWORD") {
        cfg.password = v;
    }
    if let Some(v) = non_blank("RAILSYNC_PROJECT_ID") {
        cfg.project_id = Some(parse_id("RAILSYNC_PROJECT_ID", &v)?);
    }
    if let Some(v) = non_blank("RAILSYNC_SUITE_ID") {
        cfg.suite_id = Some(parse_id("RAILSYNC_SUITE_ID", &v)?);
    }
    Ok(())
}

fn parse_id(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::EnvInvalid {
            key: key.to_string(),
            source: e.into(),
        })
}
