use crate::spec::Operator;

/// Errors which can be returned when compiling a label selector.
#[derive(Debug, Clone, PartialEq, Eq, snafu::Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
    /// The match expression operator is not one of the supported operators.
    #[snafu(display(
        "'{}' is not a valid label selector operator for key '{}'",
        operator,
        key
    ))]
    InvalidOperator {
        /// The key of the offending expression.
        key: String,
        /// The operator as it was specified.
        operator: String,
    },
    /// A set based operator was specified without any values.
    #[snafu(display("Values must be non-empty for operator '{}' on key '{}'", operator, key))]
    EmptyValues {
        /// The key of the offending expression.
        key: String,
        /// The set based operator.
        operator: Operator,
    },
    /// An existence operator was specified with values.
    #[snafu(display(
        "Values must be empty for operator '{}' on key '{}'",
        operator,
        key
    ))]
    UnexpectedValues {
        /// The key of the offending expression.
        key: String,
        /// The existence operator.
        operator: Operator,
    },
    /// The label key is not a valid qualified name.
    #[snafu(display("Invalid label key '{}': {}", key, reason))]
    InvalidKey {
        /// The invalid key.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },
    /// The label value is not valid.
    #[snafu(display("Invalid label value '{}' for key '{}': {}", value, key, reason))]
    InvalidValue {
        /// The key which the value belongs to.
        key: String,
        /// The invalid value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}
