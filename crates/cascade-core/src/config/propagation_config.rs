//! Propagation configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How the explanation recorder resolves repeated causes for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationPolicy {
    /// The most recently applied change wins, even if a milder cause
    /// re-fires after a harsher one. Matches the historical behavior.
    #[default]
    LastWriter,
    /// A recorded cause is only replaced by a strictly worse
    /// (status, strength) pair.
    MostSevere,
}

/// Configuration for the propagation subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Cause-resolution policy. Default: `last_writer`.
    pub explanation_policy: ExplanationPolicy,
}

impl PropagationConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
