use crate::{
    config::{PluginConfig, SchedulerConfig},
    error::{ConfigurationError, DuplicateName, DuplicateType, UnknownType},
    plugins::{
        filter::{by_labels_factory, BY_LABELS_FILTER_TYPE},
        Filter,
    },
};
use std::collections::{HashMap, HashSet};

/// Creates a filter instance from its name and its raw parameters.
pub type FilterFactory =
    fn(&str, Option<&serde_json::Value>) -> Result<Box<dyn Filter>, ConfigurationError>;

/// Registry of the filter factories, keyed by the plugin type.
#[derive(Clone)]
pub struct FilterRegistry {
    factories: HashMap<String, FilterFactory>,
}
impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("kinds", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for FilterRegistry {
    /// A registry with all the in-tree filters.
    fn default() -> Self {
        let mut factories = HashMap::<String, FilterFactory>::new();
        factories.insert(BY_LABELS_FILTER_TYPE.to_string(), by_labels_factory);
        Self { factories }
    }
}

impl FilterRegistry {
    /// A registry without any filters.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }
    /// Register a factory for the given plugin type.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        factory: FilterFactory,
    ) -> Result<(), ConfigurationError> {
        let kind = kind.into();
        snafu::ensure!(
            !self.factories.contains_key(&kind),
            DuplicateType { kind }
        );
        self.factories.insert(kind, factory);
        Ok(())
    }
    /// Get the registered plugin types.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
    /// Create the filter instance described by the plugin configuration.
    #[tracing::instrument(
        level = "debug",
        skip(self, config),
        err,
        fields(plugin.kind = %config.kind, plugin.name = %config.name())
    )]
    pub fn instantiate(
        &self,
        config: &PluginConfig,
    ) -> Result<Box<dyn Filter>, ConfigurationError> {
        let factory = self
            .factories
            .get(&config.kind)
            .ok_or_else(|| UnknownType { kind: &config.kind }.build())?;
        factory(config.name(), config.parameters.as_ref())
    }
    /// Create all the filter instances of the scheduler configuration, in order.
    /// Every instance must have a unique name.
    pub fn build(
        &self,
        config: &SchedulerConfig,
    ) -> Result<Vec<Box<dyn Filter>>, ConfigurationError> {
        let mut names = HashSet::with_capacity(config.plugins.len());
        config
            .plugins
            .iter()
            .map(|plugin| {
                snafu::ensure!(
                    names.insert(plugin.name()),
                    DuplicateName {
                        name: plugin.name()
                    }
                );
                self.instantiate(plugin)
            })
            .collect()
    }
}
