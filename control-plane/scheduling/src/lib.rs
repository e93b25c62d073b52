//! Filter plugins for the request scheduling cycle.
//! Each filter narrows down the list of candidate pods which may serve a request; the
//! scheduler invokes the configured filters in sequence.

/// Scheduler configuration documents.
pub mod config;
/// Errors raised while configuring the filters.
pub mod error;
/// The plugin interfaces and the filter implementations.
pub mod plugins;
/// The registry of plugin factories, by plugin type.
pub mod registry;
/// Pods and requests as seen by the filters.
pub mod types;

pub use error::ConfigurationError;
