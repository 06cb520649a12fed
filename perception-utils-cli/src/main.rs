use clap::Parser;
use perception_utils::{highest_prob_classification, Label, ObjectClassification};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Select the most probable label per object (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    input_path: String,
    output_path: Option<String>,
    include_probability: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: String::new(),
            output_path: None,
            include_probability: true,
        }
    }
}

/// One detected object as produced upstream; only its hypotheses are read.
#[derive(Debug, Deserialize)]
struct DetectedObject {
    #[serde(default)]
    classification: Vec<ObjectClassification>,
}

#[derive(Debug, PartialEq, Serialize)]
struct DecisionRecord {
    index: usize,
    label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    probability: Option<f64>,
    is_vehicle: bool,
    is_car_like_vehicle: bool,
    is_large_vehicle: bool,
}

fn decide(index: usize, object: &DetectedObject, include_probability: bool) -> DecisionRecord {
    let best = highest_prob_classification(&object.classification);
    DecisionRecord {
        index,
        label: best.label,
        probability: include_probability.then_some(best.probability),
        is_vehicle: best.label.is_vehicle(),
        is_car_like_vehicle: best.label.is_car_like_vehicle(),
        is_large_vehicle: best.label.is_large_vehicle(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("perception_utils=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.input_path.is_empty() {
        return Err("input_path must be set in the config".into());
    }

    let input_text = fs::read_to_string(&config.input_path)?;
    let objects: Vec<DetectedObject> = serde_json::from_str(&input_text)?;
    tracing::info!(objects = objects.len(), input = %config.input_path, "loaded objects");

    let records: Vec<DecisionRecord> = objects
        .iter()
        .enumerate()
        .map(|(index, object)| decide(index, object, config.include_probability))
        .collect();
    let json = serde_json::to_string_pretty(&records)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
