/// All errors that can be returned while building the scheduling filters.
/// None of these can happen while filtering, only when configuring.
#[derive(Debug, snafu::Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum ConfigurationError {
    /// The filter instance was given an empty name.
    #[snafu(display("{} filter: missing filter name", kind))]
    MissingName { kind: String },
    /// The label selector failed to compile.
    #[snafu(display("{} filter '{}': invalid label selector. Error {}", kind, name, source))]
    Selector {
        kind: String,
        name: String,
        source: label_selector::Error,
    },
    /// The plugin parameters could not be deserialised.
    #[snafu(display(
        "Failed to deserialise parameters of {} plugin '{}'. Error {}",
        kind,
        name,
        source
    ))]
    Parameters {
        kind: String,
        name: String,
        source: serde_json::Error,
    },
    /// No factory is registered for the plugin type.
    #[snafu(display("Unknown plugin type '{}'", kind))]
    UnknownType { kind: String },
    /// A factory is already registered for the plugin type.
    #[snafu(display("A factory for plugin type '{}' is already registered", kind))]
    DuplicateType { kind: String },
    /// More than one plugin instance has the same name.
    #[snafu(display("Plugin name '{}' is used more than once", name))]
    DuplicateName { name: String },
    /// Failed to read the configuration file.
    #[snafu(display("Failed to read configuration file '{}'. Error {}", path.display(), source))]
    ReadConfig {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration document.
    #[snafu(display("Failed to parse configuration. Error {}", source))]
    ParseConfig { source: serde_yaml::Error },
}
