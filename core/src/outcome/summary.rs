use serde::{Deserialize, Serialize};

/// Payload of the "run ended" notification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Human-readable browser/platform descriptor of the run.
    #[serde(default, alias = "sanitizedCapabilities")]
    pub sanitized_capabilities: String,
}
