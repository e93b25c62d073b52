use crate::error::{ConfigurationError, ParseConfig, ReadConfig};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::Path;

/// Configuration of a single plugin instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// The plugin type, eg: `by-labels`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The instance name, which defaults to the plugin type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The plugin specific parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}
impl PluginConfig {
    /// Create a new `Self`.
    pub fn new(kind: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
            parameters: None,
        }
    }
    /// Set the plugin parameters.
    #[must_use]
    pub fn with_parameters(self, parameters: serde_json::Value) -> Self {
        Self {
            parameters: Some(parameters),
            ..self
        }
    }
    /// Get the instance name, falling back to the plugin type.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.kind)
    }
}

/// The scheduler configuration: the plugin instances, in the order in which they run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// The plugin instances.
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}
impl SchedulerConfig {
    /// Parse the configuration from a yaml (or json) document.
    pub fn from_yaml(document: &str) -> Result<Self, ConfigurationError> {
        serde_yaml::from_str(document).context(ParseConfig)
    }
    /// Read and parse the configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).context(ReadConfig { path })?;
        let config = Self::from_yaml(&document)?;
        tracing::info!(
            path = %path.display(),
            plugins = config.plugins.len(),
            "Loaded scheduler configuration"
        );
        Ok(config)
    }
}
