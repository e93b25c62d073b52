use crate::{
    error::{self, ConfigurationError},
    plugins::{Filter, Plugin},
    types::{LlmRequest, Pod, PodRef},
};
use label_selector::{LabelSelector, Selector};
use serde::Deserialize;
use snafu::ResultExt;

/// The type of the `ByLabels` filter.
pub const BY_LABELS_FILTER_TYPE: &str = "by-labels";

/// Filters out the pods whose labels do not satisfy a label selector.
#[derive(Debug, Clone)]
pub struct ByLabels {
    name: String,
    selector: Selector,
}

impl ByLabels {
    /// Create a new filter with the given name, selecting the pods which match the label
    /// selector. A missing or empty selector selects all pods.
    pub fn new(
        name: impl Into<String>,
        selector: Option<&LabelSelector>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        snafu::ensure!(
            !name.is_empty(),
            error::MissingName {
                kind: BY_LABELS_FILTER_TYPE
            }
        );
        let selector = Selector::compile(selector).context(error::Selector {
            kind: BY_LABELS_FILTER_TYPE,
            name: &name,
        })?;
        tracing::debug!(filter.name = %name, %selector, "Created label selector filter");
        Ok(Self { name, selector })
    }
    /// Rename the filter. This has no effect on which pods are selected.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
    /// Rename the filter and return it.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }
    /// Get the compiled selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl Plugin for ByLabels {
    fn kind(&self) -> &str {
        BY_LABELS_FILTER_TYPE
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Filter for ByLabels {
    fn filter(&self, _request: &LlmRequest, pods: &[PodRef]) -> Vec<PodRef> {
        let filtered = pods
            .iter()
            .filter(|pod| self.selector.matches(pod.labels()))
            .cloned()
            .collect::<Vec<_>>();
        tracing::debug!(
            filter.name = %self.name,
            candidates = pods.len(),
            selected = filtered.len(),
            "Filtered pods by labels"
        );
        filtered
    }
}

/// Create a `ByLabels` filter from its plugin parameters, which hold the label selector.
pub fn by_labels_factory(
    name: &str,
    parameters: Option<&serde_json::Value>,
) -> Result<Box<dyn Filter>, ConfigurationError> {
    let selector = match parameters {
        None | Some(serde_json::Value::Null) => None,
        Some(parameters) => {
            Some(
                LabelSelector::deserialize(parameters).context(error::Parameters {
                    kind: BY_LABELS_FILTER_TYPE,
                    name,
                })?,
            )
        }
    };
    Ok(Box::new(ByLabels::new(name, selector.as_ref())?))
}
