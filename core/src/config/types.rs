use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Placeholder in `run_description` replaced by the run's capability descriptor.
pub const CAPABILITIES_TOKEN: &str = "{capabilities}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Host of the case-management service, or a full `http(s)://` URL.
    #[serde(default)]
    pub base_url: String,

    #[serde(default)]
    pub project_id: Option<u64>,

    #[serde(default)]
    pub suite_id: Option<u64>,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub include_all: bool,

    #[serde(default = "default_run_name")]
    pub run_name: String,

    #[serde(default = "default_run_description")]
    pub run_description: String,

    #[serde(default = "default_case_id_pattern")]
    pub case_id_pattern: String,

    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_run_name() -> String {
    "Ignore".to_string()
}

fn default_run_description() -> String {
    CAPABILITIES_TOKEN.to_string()
}

fn default_case_id_pattern() -> String {
    r"#\d{6}".to_string()
}

fn default_results_dir() -> String {
    "./tmp-results".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            project_id: None,
            suite_id: None,
            username: String::new(),
            password: String::new(),
            include_all: false,
            run_name: default_run_name(),
            run_description: default_run_description(),
            case_id_pattern: default_case_id_pattern(),
            results_dir: default_results_dir(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Required settings, resolved once validation has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTarget {
    pub project_id: u64,
    pub suite_id: u64,
}

impl SyncConfig {
    /// Checks the required settings and the case id pattern.
    pub fn validate(&self) -> Result<RunTarget, ConfigError> {
        let mut missing = Vec::new();
        if self.base_url.trim().is_empty() {
            missing.push("base_url");
        }
        if self.project_id.is_none() {
            missing.push("project_id");
        }
        if self.suite_id.is_none() {
            missing.push("suite_id");
        }
        if self.username.trim().is_empty() {
            missing.push("username");
        }
        if self.password.is_empty() {
            missing.push("password");
        }

        let (Some(project_id), Some(suite_id)) = (self.project_id, self.suite_id) else {
            return Err(ConfigError::MissingFields(missing));
        };
        if !missing.is_empty() {
            return Err(ConfigError::MissingFields(missing));
        }

        if let Err(source) = regex::Regex::new(&self.case_id_pattern) {
            return Err(ConfigError::Pattern {
                pattern: self.case_id_pattern.clone(),
                source,
            });
        }

        Ok(RunTarget {
            project_id,
            suite_id,
        })
    }

    /// Root URL every route is joined onto, always ending in `/`.
    pub fn service_url(&self) -> String {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            format!("{trimmed}/")
        } else {
            format!("https://{trimmed}/")
        }
    }

    pub fn render_description(&self, capabilities: &str) -> String {
        self.run_description.replace(CAPABILITIES_TOKEN, capabilities)
    }
}
