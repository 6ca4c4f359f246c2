// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Command-line entry point for the L3 FIB validator. Reads a node
//! telemetry snapshot (JSON or YAML) from a file or stdin, runs the
//! validator over it, and streams findings through `tracing`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use l3_validator::validate_all;
use report::TracingReport;
use std::io::{self, Read};
use std::path::PathBuf;
use telemetry_model::{InMemoryVppCache, Node};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "l3fib-validator", about = "Validate a node's L3 FIB snapshot")]
struct Cli {
    /// Path to a snapshot file. Reads stdin if omitted.
    input: Option<PathBuf>,

    /// Snapshot encoding. Inferred from the input file's extension when
    /// a path is given; required when reading from stdin.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Maximum tracing verbosity.
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_input(cli: &Cli) -> Result<(String, InputFormat)> {
    let format = cli.format.or_else(|| infer_format(cli.input.as_deref()));

    let text = match &cli.input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };

    let format = format.context("snapshot format could not be inferred; pass --format")?;
    Ok((text, format))
}

fn infer_format(path: Option<&std::path::Path>) -> Option<InputFormat> {
    match path?.extension()?.to_str()? {
        "json" => Some(InputFormat::Json),
        "yaml" | "yml" => Some(InputFormat::Yaml),
        _ => None,
    }
}

fn parse_nodes(text: &str, format: InputFormat) -> Result<Vec<Node>> {
    match format {
        InputFormat::Json => serde_json::from_str(text).context("parsing JSON snapshot"),
        InputFormat::Yaml => serde_yaml_ng::from_str(text).context("parsing YAML snapshot"),
    }
}

fn run() -> Result<u32> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let (text, format) = read_input(&cli)?;
    let nodes = parse_nodes(&text, format)?;

    let cache = InMemoryVppCache::new(nodes);
    let report = TracingReport;
    Ok(validate_all(&cache, &report))
}

fn main() -> Result<()> {
    let errors = run()?;
    std::process::exit(if errors == 0 { 0 } else { 1 });
}
