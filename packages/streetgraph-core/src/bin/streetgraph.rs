//! Street adjacency graph CLI
//!
//! # Usage
//!
//! ```bash
//! # Build and export the graph described by config.yaml
//! cargo run --bin streetgraph --release -- --input data/streets.json
//!
//! # Explicit config and output directory
//! cargo run --bin streetgraph -- --input streets.json --config graph.yaml --output out/
//!
//! # Peek at the first features and exit
//! cargo run --bin streetgraph -- --input streets.json --print-head
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use streetgraph_core::pipeline::default_output_dir;
use streetgraph_core::{
    FeatureSource, GeometryEngine, JsonFeatureSource, PlanarEngine, StreetGraphPipeline,
    ValidatedConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HEAD_ROWS: usize = 3;

#[derive(Parser)]
#[command(name = "streetgraph")]
#[command(about = "Build a street adjacency graph from line features", long_about = None)]
struct Cli {
    /// JSON feature document (`{"features": [...]}` with WKT geometries)
    #[arg(short, long)]
    input: PathBuf,

    /// YAML configuration
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output directory (default: output_{input}_{YYYYmmddHHMM})
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the first raw features and exit
    #[arg(long)]
    print_head: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut source = JsonFeatureSource::from_path(&cli.input);
    let engine = PlanarEngine::new();

    if cli.print_head {
        for feature in source.read()?.iter().take(HEAD_ROWS) {
            println!(
                "{}\t{}",
                serde_json::to_string(&feature.attributes)?,
                engine.to_wkt(&feature.geometry)
            );
        }
        return Ok(());
    }

    let config = ValidatedConfig::from_yaml(&cli.config)?;
    info!(config = %cli.config.display(), "configuration loaded");

    let output_dir = cli
        .output
        .unwrap_or_else(|| default_output_dir(source.name()));

    let pipeline = StreetGraphPipeline::new(&config, engine);
    let output = pipeline.run(&mut source)?;

    match pipeline.export(&output, &output_dir)? {
        Some(report) => {
            for file in &report.files {
                info!(file = %file.display(), "written");
            }
        }
        None => info!("nothing exported"),
    }
    Ok(())
}
