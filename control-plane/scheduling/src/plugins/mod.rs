/// The filter plugins.
pub mod filter;

use crate::types::{LlmRequest, PodRef};
use std::fmt::Debug;

/// The type and the instance name of a plugin.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TypedName {
    /// The plugin type, shared by all instances of the same plugin.
    pub kind: String,
    /// The name of the plugin instance.
    pub name: String,
}
impl std::fmt::Display for TypedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.kind)
    }
}

/// Identity of a plugin instance within the scheduler.
pub trait Plugin: Debug + Send + Sync {
    /// The plugin type, used to discover the plugin kind.
    fn kind(&self) -> &str;
    /// The name of this plugin instance, used for diagnostics only.
    fn name(&self) -> &str;
    /// Get both the type and the name.
    fn typed_name(&self) -> TypedName {
        TypedName {
            kind: self.kind().to_string(),
            name: self.name().to_string(),
        }
    }
}

/// A scheduling filter narrows down the candidate pods for a request.
pub trait Filter: Plugin {
    /// Return the candidate pods which pass the filter, in their original order.
    /// Filtering cannot fail: an empty list is a valid outcome which the scheduler must handle.
    fn filter(&self, request: &LlmRequest, pods: &[PodRef]) -> Vec<PodRef>;
}
