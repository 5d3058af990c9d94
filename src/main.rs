//! universal-release: builds the flattened Universal Gaming Ontology release.
//!
//! Usage:
//!   universal-release build [--config release.yaml] [--legacy path] [--out path]...
//!   universal-release config [--config release.yaml]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use universal_release::{ReleaseAssembler, ReleaseConfig, ReleaseWriter};

#[derive(Parser)]
#[command(name = "universal-release", version, about = "Universal Gaming Ontology release builder")]
struct Cli {
    /// YAML configuration file; unset keys keep their defaults
    #[arg(long, global = true, env = "UNIVERSAL_RELEASE_CONFIG")]
    config: Option<PathBuf>,

    /// Log debug output (per-term mappings)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the release graph and write it to every destination
    Build {
        /// Legacy core ontology
        #[arg(long)]
        legacy: Option<PathBuf>,
        /// Universal human-behavior foundation
        #[arg(long)]
        human_behavior: Option<PathBuf>,
        /// Universal gaming foundation
        #[arg(long)]
        gaming: Option<PathBuf>,
        /// Destination paths; the first is canonical, the rest are mirrors
        #[arg(long = "out")]
        outputs: Vec<PathBuf>,
        /// Print run statistics as JSON on stdout
        #[arg(long)]
        stats_json: bool,
    },
    /// Print the effective configuration as YAML
    Config,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    // stdout carries only the report or the JSON stats
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReleaseConfig::from_yaml_file(path)?,
        None => ReleaseConfig::default(),
    };

    match cli.command {
        Commands::Build {
            legacy,
            human_behavior,
            gaming,
            outputs,
            stats_json,
        } => {
            if let Some(path) = legacy {
                config.sources.legacy = path;
            }
            if let Some(path) = human_behavior {
                config.sources.human_behavior = path;
            }
            if let Some(path) = gaming {
                config.sources.gaming = path;
            }
            let mut outputs = outputs.into_iter();
            if let Some(canonical) = outputs.next() {
                config.outputs.canonical = canonical;
                config.outputs.mirrors = outputs.collect();
            }

            config.validate()?;
            let release = ReleaseAssembler::from_config(&config)
                .build_from_paths(&config.sources)
                .context("release build failed")?;
            let report = ReleaseWriter::write_all(&release, &config.outputs)
                .context("writing release failed")?;

            if stats_json {
                println!("{}", serde_json::to_string_pretty(&release.stats)?);
            } else {
                println!("Wrote:");
                for path in &report.paths {
                    println!("- {}", path.display());
                }
                println!("Stats: {:?}", release.stats);
            }
        }
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}
