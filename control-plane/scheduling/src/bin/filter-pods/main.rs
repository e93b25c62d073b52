//! Runs the configured scheduling filters over a list of pods and prints the pods which pass
//! all of them. Useful to check a scheduler configuration against a known set of pods.

use anyhow::Context;
use clap::Parser;
use scheduling::{
    config::SchedulerConfig,
    plugins::{Filter, Plugin},
    registry::FilterRegistry,
    types::{LlmRequest, Pod, PodInfo, PodRef},
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing output style.
#[derive(Debug, Clone, Copy, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
enum FmtStyle {
    /// Compact style.
    Compact,
    /// Pretty style.
    Pretty,
    /// JSON style.
    Json,
}

/// Output format of the selected pods.
#[derive(Debug, Clone, Copy, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
enum Output {
    Yaml,
    Json,
}

/// The Cli arguments for this binary.
#[derive(Debug, Parser)]
#[clap(name = "filter-pods", version)]
struct CliArgs {
    /// The scheduler configuration file, listing the filter plugins.
    #[clap(long, short, env = "SCHEDULER_CONFIG")]
    config: PathBuf,

    /// A yaml (or json) file with the list of candidate pods.
    #[clap(long, short)]
    pods: PathBuf,

    /// The model targeted by the request being scheduled.
    #[clap(long, default_value = "")]
    target_model: String,

    /// Formatting style to be used while logging.
    #[clap(long, env = "FMT_STYLE", default_value = "compact")]
    fmt_style: FmtStyle,

    /// Output format of the selected pods.
    #[clap(long, short, default_value = "yaml")]
    output: Output,
}

fn init_tracing(style: FmtStyle) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    match style {
        FmtStyle::Compact => subscriber.with(layer.compact()).init(),
        FmtStyle::Pretty => subscriber.with(layer.pretty()).init(),
        FmtStyle::Json => subscriber.with(layer.json()).init(),
    }
}

fn load_pods(path: &Path) -> anyhow::Result<Vec<PodRef>> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pods file '{}'", path.display()))?;
    let pods: Vec<PodInfo> = serde_yaml::from_str(&document)
        .with_context(|| format!("Failed to parse pods file '{}'", path.display()))?;
    Ok(pods
        .into_iter()
        .map(|pod| Arc::new(pod) as PodRef)
        .collect())
}

fn run_filters(
    filters: &[Box<dyn Filter>],
    request: &LlmRequest,
    pods: Vec<PodRef>,
) -> Vec<PodRef> {
    filters.iter().fold(pods, |pods, filter| {
        let filtered = filter.filter(request, &pods);
        tracing::info!(
            filter = %filter.typed_name(),
            before = pods.len(),
            after = filtered.len(),
            "Ran filter"
        );
        filtered
    })
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.fmt_style);

    let config = SchedulerConfig::from_file(&args.config)?;
    let filters = FilterRegistry::default().build(&config)?;
    let pods = load_pods(&args.pods)?;

    let request = LlmRequest::new("filter-pods", args.target_model);
    let selected = run_filters(&filters, &request, pods)
        .iter()
        .map(|pod| pod.info().clone())
        .collect::<Vec<_>>();

    let output = match args.output {
        Output::Yaml => serde_yaml::to_string(&selected)?,
        Output::Json => serde_json::to_string_pretty(&selected)?,
    };
    println!("{output}");
    Ok(())
}
