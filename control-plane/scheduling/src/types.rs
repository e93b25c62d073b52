use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Debug, sync::Arc};

/// Labels is the type for the pod labels.
pub type Labels = HashMap<String, String>;

/// Namespace qualified name of a pod.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct NamespacedName {
    /// The namespace, which may be empty for cluster scoped resources.
    #[serde(default)]
    pub namespace: String,
    /// The name of the resource.
    pub name: String,
}
impl NamespacedName {
    /// Create a new `Self`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}
impl std::fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Pod information, as discovered by the datastore.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodInfo {
    /// The pod name.
    pub name: NamespacedName,
    /// The address the pod serves on.
    #[serde(default)]
    pub address: String,
    /// The pod labels.
    #[serde(default)]
    pub labels: Labels,
}
impl PodInfo {
    /// Create a new `Self` without any labels.
    pub fn new(name: NamespacedName, address: impl Into<String>) -> Self {
        Self {
            name,
            address: address.into(),
            labels: Labels::new(),
        }
    }
    /// Add the given labels, overwriting existing labels with the same keys.
    #[must_use]
    pub fn with_labels<K: Into<String>, V: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// A candidate pod, as seen by the scheduling plugins.
/// The pod is owned by the datastore: the plugins only read it.
pub trait Pod: Debug + Send + Sync {
    /// Get the pod information.
    fn info(&self) -> &PodInfo;
    /// Get the pod labels.
    fn labels(&self) -> &Labels {
        &self.info().labels
    }
}
impl Pod for PodInfo {
    fn info(&self) -> &PodInfo {
        self
    }
}

/// A shared reference to a candidate pod.
pub type PodRef = Arc<dyn Pod>;

/// The request being scheduled.
/// The filters may not need to inspect it at all.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LlmRequest {
    /// Identifies the request, for tracing purposes.
    pub request_id: String,
    /// The model the request targets.
    pub target_model: String,
    /// The request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}
impl LlmRequest {
    /// Create a new `Self`.
    pub fn new(request_id: impl Into<String>, target_model: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            target_model: target_model.into(),
            headers: HashMap::new(),
        }
    }
}
