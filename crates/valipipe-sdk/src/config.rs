//! Configuration types for the Valipipe facade

use crate::builtins;
use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Facade configuration
///
/// ```yaml
/// register_builtins: true
/// exclude:
///   - email
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValipipeConfig {
    /// Install the built-in catalogue
    pub register_builtins: bool,

    /// Built-ins to leave out
    pub exclude: Vec<String>,
}

impl ValipipeConfig {
    /// Create a new configuration with every built-in enabled
    pub fn new() -> Self {
        Self {
            register_builtins: true,
            exclude: Vec::new(),
        }
    }

    /// Enable or disable the built-in catalogue
    pub fn with_builtins(mut self, enable: bool) -> Self {
        self.register_builtins = enable;
        self
    }

    /// Leave one built-in out
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude.push(name.into());
        self
    }

    /// Parse configuration from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading valipipe config from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check that every excluded name is a known built-in
    pub fn validate(&self) -> Result<()> {
        if let Some(unknown) = self
            .exclude
            .iter()
            .find(|name| !builtins::NAMES.contains(&name.as_str()))
        {
            return Err(SdkError::ConfigError(format!(
                "Cannot exclude unknown built-in '{}'",
                unknown
            )));
        }
        Ok(())
    }

    /// Whether the built-in `name` should be installed
    pub fn is_builtin_enabled(&self, name: &str) -> bool {
        self.register_builtins && !self.exclude.iter().any(|excluded| excluded == name)
    }
}

impl Default for ValipipeConfig {
    fn default() -> Self {
        Self::new()
    }
}
