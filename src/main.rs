mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::{Halt, RequestError};
use crate::input::{DatasetSource, load_dataset, load_full_conditions};
use crate::model::summary::QueryOutcome;
use crate::model::thresholds::PrivacyThresholds;
use crate::pipeline::operating_conditions::anonymize_columns;
use crate::pipeline::options::list_options;
use crate::pipeline::run_query;
use crate::pipeline::stage1_request::{RawRequest, normalize_request};
use crate::report::json::{render_conditions_json, render_options_json};
use crate::report::{OutputFormat, write_outcome};

#[derive(Debug, Parser)]
#[command(
    name = "compost-residuals",
    version,
    about = "Box-plot summaries of compost field trial residuals"
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Log per-stage row counts
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Directory holding the trial and operating-condition CSV files
    #[arg(long, env = "DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Dataset version suffix inserted into file names
    #[arg(long, env = "DATA_VERSION_ID", default_value = "", global = true)]
    version_id: String,

    /// Read the `_test` variant of the dataset
    #[arg(long, global = true)]
    test_data: bool,
}

impl SourceArgs {
    fn dataset_source(&self) -> DatasetSource {
        DatasetSource {
            data_dir: self.data_dir.clone(),
            version_id: self.version_id.clone(),
            use_test_data: self.test_data,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter, gate and summarize trial results
    Query(QueryArgs),
    /// List selectable values for every filter
    Options,
    /// Print the full operating-conditions table with trial columns renamed
    /// to technology and number
    OperatingConditions,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Request parameter as key=value, e.g. technologies=All
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// JSON object of request parameters, applied before --set
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = cli.source.dataset_source();
    match &cli.command {
        Command::Query(args) => run_query_command(&source, args),
        Command::Options => {
            let dataset = load_dataset(&source).map_err(|e| e.to_string())?;
            let options = list_options(&dataset.trials);
            let json = render_options_json(&options).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        Command::OperatingConditions => {
            let table = load_full_conditions(&source).map_err(|e| e.to_string())?;
            let renamed = anonymize_columns(table);
            let json = render_conditions_json(&renamed).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn run_query_command(source: &DatasetSource, args: &QueryArgs) -> Result<(), String> {
    let raw = build_raw_request(args.params.as_deref(), &args.set).map_err(|e| e.to_string())?;
    let thresholds = PrivacyThresholds::default_v1();

    // An incomplete selection is answered before any data is read.
    let outcome = match normalize_request(&raw) {
        Err(Halt::Suppressed(reason)) => QueryOutcome::suppressed(reason),
        Err(Halt::Invalid(err)) => return Err(err.to_string()),
        Ok(params) => {
            let dataset = load_dataset(source).map_err(|e| e.to_string())?;
            run_query(&dataset, &params, &thresholds)
        }
    };

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_outcome(&mut lock, &outcome, args.format).map_err(|e| e.to_string())?;
    lock.flush().map_err(|e| e.to_string())
}

fn build_raw_request(params: Option<&Path>, pairs: &[String]) -> Result<RawRequest, String> {
    let mut raw = RawRequest::new();
    if let Some(path) = params {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        raw.extend(parse_params_json(&text).map_err(|e| e.to_string())?);
    }
    for pair in pairs {
        let (key, value) = parse_pair(pair).map_err(|e| e.to_string())?;
        raw.insert(key, value);
    }
    Ok(raw)
}

fn parse_pair(pair: &str) -> Result<(String, String), RequestError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(RequestError::MalformedPair(pair.to_string())),
    }
}

/// Strings pass through, booleans and numbers are stringified, string arrays
/// are comma-joined.
fn parse_params_json(text: &str) -> Result<RawRequest, RequestError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RequestError::MalformedParams(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(RequestError::MalformedParams("not an object".to_string()));
    };

    let mut raw = RawRequest::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::String(s) => parts.push(s),
                        other => {
                            return Err(RequestError::MalformedParams(format!(
                                "{key}: unexpected array item {other}"
                            )));
                        }
                    }
                }
                parts.join(",")
            }
            other => {
                return Err(RequestError::MalformedParams(format!(
                    "{key}: unexpected value {other}"
                )));
            }
        };
        raw.insert(key, text);
    }
    Ok(raw)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
