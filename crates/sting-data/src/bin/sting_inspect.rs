//! sting-inspect
//!
//! Summarise a C4.5 dataset: schema, shape, missing values and label balance.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use sting_data::{parse_c45_with, DirectoryLocator, Feature, ParseOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sting-inspect", version, about = "Summarise a C4.5 dataset")]
struct Args {
    /// Dataset base name (looks for <NAME>.names and <NAME>.data)
    name: String,

    /// Directory searched, recursively, for the dataset files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// TOML file with parse options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    name: &'a str,
    examples: usize,
    features: &'a [Feature],
    missing_per_feature: Vec<usize>,
    positive: usize,
    negative: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => ParseOptions::from_toml(&std::fs::read_to_string(path)?)?,
        None => ParseOptions::default(),
    };

    let locator = DirectoryLocator::new(&args.dir);
    let dataset = parse_c45_with(&args.name, &locator, &options)?;

    let positive = dataset.positive_count();
    let summary = Summary {
        name: &args.name,
        examples: dataset.n_examples(),
        features: dataset.schema.features(),
        missing_per_feature: dataset.missing_per_feature(),
        positive,
        negative: dataset.n_examples() - positive,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}: {} examples x {} features",
        summary.name,
        summary.examples,
        summary.features.len()
    );
    for (feature, missing) in summary.features.iter().zip(&summary.missing_per_feature) {
        println!(
            "  {:<10} {:<40} missing: {}",
            feature.ftype(),
            feature.to_string(),
            missing
        );
    }
    println!(
        "labels: {} positive, {} negative",
        summary.positive, summary.negative
    );

    Ok(())
}
