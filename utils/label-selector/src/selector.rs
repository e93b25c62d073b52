use crate::{
    error::{EmptyValues, Error, InvalidKey, InvalidOperator, InvalidValue, UnexpectedValues},
    labels::Labels,
    spec::{LabelSelector, LabelSelectorRequirement, Operator},
    validation,
};
use std::{collections::BTreeSet, fmt::Display, str::FromStr};

#[derive(Debug, Clone, Eq, PartialEq)]
enum Predicate {
    Equals(String),
    In(BTreeSet<String>),
    NotIn(BTreeSet<String>),
    Exists,
    DoesNotExist,
}

/// A single validated term of a compiled selector.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Requirement {
    key: String,
    predicate: Predicate,
}

impl Requirement {
    /// Create an equality requirement: the label `key` must have exactly `value`.
    pub fn equals(key: &str, value: &str) -> Result<Self, Error> {
        Self::validate_key(key)?;
        Self::validate_value(key, value)?;
        Ok(Self {
            key: key.to_string(),
            predicate: Predicate::Equals(value.to_string()),
        })
    }
    /// Create a requirement from an expression operator and its values.
    pub fn new(key: &str, operator: Operator, values: &[String]) -> Result<Self, Error> {
        Self::validate_key(key)?;
        let predicate = match operator {
            Operator::In | Operator::NotIn => {
                snafu::ensure!(!values.is_empty(), EmptyValues { key, operator });
                for value in values {
                    Self::validate_value(key, value)?;
                }
                let values = values.iter().cloned().collect();
                match operator {
                    Operator::In => Predicate::In(values),
                    _ => Predicate::NotIn(values),
                }
            }
            Operator::Exists | Operator::DoesNotExist => {
                snafu::ensure!(values.is_empty(), UnexpectedValues { key, operator });
                match operator {
                    Operator::Exists => Predicate::Exists,
                    _ => Predicate::DoesNotExist,
                }
            }
        };
        Ok(Self {
            key: key.to_string(),
            predicate,
        })
    }
    /// Get the label key this requirement applies to.
    pub fn key(&self) -> &str {
        &self.key
    }
    /// Check if the given labels satisfy this requirement.
    pub fn matches<L: Labels + ?Sized>(&self, labels: &L) -> bool {
        match &self.predicate {
            Predicate::Equals(value) => labels.get(&self.key) == Some(value.as_str()),
            Predicate::In(values) => labels
                .get(&self.key)
                .map_or(false, |value| values.contains(value)),
            Predicate::NotIn(values) => labels
                .get(&self.key)
                .map_or(true, |value| !values.contains(value)),
            Predicate::Exists => labels.has(&self.key),
            Predicate::DoesNotExist => !labels.has(&self.key),
        }
    }

    fn validate_key(key: &str) -> Result<(), Error> {
        validation::key(key).map_err(|reason| InvalidKey { key, reason }.build())
    }
    fn validate_value(key: &str, value: &str) -> Result<(), Error> {
        validation::value(value).map_err(|reason| InvalidValue { key, value, reason }.build())
    }
}

impl TryFrom<&LabelSelectorRequirement> for Requirement {
    type Error = Error;

    fn try_from(src: &LabelSelectorRequirement) -> Result<Self, Self::Error> {
        let operator = Operator::from_str(&src.operator).map_err(|_| {
            InvalidOperator {
                key: &src.key,
                operator: &src.operator,
            }
            .build()
        })?;
        Self::new(&src.key, operator, src.values())
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |values: &BTreeSet<String>| {
            values
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",")
        };
        match &self.predicate {
            Predicate::Equals(value) => write!(f, "{}={}", self.key, value),
            Predicate::In(values) => write!(f, "{} in ({})", self.key, join(values)),
            Predicate::NotIn(values) => write!(f, "{} notin ({})", self.key, join(values)),
            Predicate::Exists => write!(f, "{}", self.key),
            Predicate::DoesNotExist => write!(f, "!{}", self.key),
        }
    }
}

/// A compiled label selector.
/// The labels match if and only if all of the requirements are satisfied, meaning that an
/// empty selector matches every label set.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Selector {
    requirements: Vec<Requirement>,
}

impl Selector {
    /// A selector which matches everything.
    pub fn everything() -> Self {
        Self::default()
    }
    /// Compile the given specification.
    /// No specification, or one without any terms, compiles into a selector which matches
    /// everything. A single invalid term fails the whole compilation.
    pub fn compile(spec: Option<&LabelSelector>) -> Result<Self, Error> {
        let Some(spec) = spec else {
            return Ok(Self::everything());
        };

        let labels = spec.match_labels.iter().flatten();
        let expressions = spec.match_expressions.iter().flatten();

        let mut requirements = labels
            .map(|(key, value)| Requirement::equals(key, value))
            .chain(expressions.map(Requirement::try_from))
            .collect::<Result<Vec<_>, _>>()?;
        requirements.sort_by(|a, b| a.key.cmp(&b.key));

        let selector = Self { requirements };
        tracing::trace!(%selector, "Compiled label selector");
        Ok(selector)
    }
    /// Check if the selector has no requirements, ie: it matches everything.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
    /// Get the requirements, sorted by their keys.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
    /// Check if the given labels satisfy every requirement.
    pub fn matches<L: Labels + ?Sized>(&self, labels: &L) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }
}

impl TryFrom<&LabelSelector> for Selector {
    type Error = Error;

    fn try_from(spec: &LabelSelector) -> Result<Self, Self::Error> {
        Self::compile(Some(spec))
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let requirements = self
            .requirements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", requirements.join(","))
    }
}
