//! The declarative label selector specification.
//! The wire shape follows the Kubernetes `LabelSelector`, so it can be loaded from the same
//! configuration documents.

use k8s_openapi::apimachinery::pkg::apis::meta::v1 as meta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumString};

/// Operator of a label selector match expression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display, AsRefStr)]
pub enum Operator {
    /// The label must be present and its value must be one of the given values.
    In,
    /// The label must either be absent or its value must not be any of the given values.
    NotIn,
    /// The label must be present, regardless of its value.
    Exists,
    /// The label must be absent.
    DoesNotExist,
}

/// A label selector requirement: a key, an operator and, for the set based
/// operators, the allowed values.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelectorRequirement {
    /// The label key that the selector applies to.
    pub key: String,
    /// The operator as specified, validated on compilation.
    pub operator: String,
    /// The values for `In` and `NotIn`, must be empty for `Exists` and `DoesNotExist`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl LabelSelectorRequirement {
    /// Create a new `Self` with a known operator.
    pub fn new(
        key: impl Into<String>,
        operator: Operator,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect::<Vec<String>>();
        Self {
            key: key.into(),
            operator: operator.to_string(),
            values: (!values.is_empty()).then_some(values),
        }
    }
    /// Get the values, an empty slice if none were specified.
    pub fn values(&self) -> &[String] {
        self.values.as_deref().unwrap_or_default()
    }
}

/// A label selector is a conjunction of equality terms (`matchLabels`) and
/// set based expression terms (`matchExpressions`).
/// An empty label selector selects everything.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    /// Each entry requires the label with the given key to have exactly the given value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
    /// Each expression must be satisfied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,
}

impl LabelSelector {
    /// Add an equality term.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.match_labels
            .get_or_insert_with(Default::default)
            .insert(key.into(), value.into());
        self
    }
    /// Add an expression term.
    #[must_use]
    pub fn with_expression(mut self, expression: LabelSelectorRequirement) -> Self {
        self.match_expressions
            .get_or_insert_with(Default::default)
            .push(expression);
        self
    }
    /// Check if the selector has no terms at all.
    pub fn is_empty(&self) -> bool {
        self.match_labels.as_ref().map_or(true, BTreeMap::is_empty)
            && self.match_expressions.as_ref().map_or(true, Vec::is_empty)
    }
}

impl From<&meta::LabelSelectorRequirement> for LabelSelectorRequirement {
    fn from(src: &meta::LabelSelectorRequirement) -> Self {
        Self {
            key: src.key.clone(),
            operator: src.operator.clone(),
            values: src.values.clone(),
        }
    }
}
impl From<&meta::LabelSelector> for LabelSelector {
    fn from(src: &meta::LabelSelector) -> Self {
        Self {
            match_labels: src.match_labels.clone(),
            match_expressions: src
                .match_expressions
                .as_ref()
                .map(|exprs| exprs.iter().map(Into::into).collect()),
        }
    }
}
impl From<meta::LabelSelector> for LabelSelector {
    fn from(src: meta::LabelSelector) -> Self {
        Self::from(&src)
    }
}
