//! Cache configuration

use serde::Deserialize;

/// Marker attribute used when none is configured
pub const DEFAULT_KEY_ATTRIBUTE: &str = "data-weft-key";

/// Identity cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Attribute that persists a key's string marker on its node
    pub key_attribute: String,
    /// Sweep entries of dropped keys after this many new associations (0 = never)
    pub prune_interval: usize,
}

impl Config {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_key_attribute(mut self, name: impl Into<String>) -> Self {
        self.key_attribute = name.into();
        self
    }

    pub fn with_prune_interval(mut self, interval: usize) -> Self {
        self.prune_interval = interval;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_string(),
            prune_interval: 64,
        }
    }
}
