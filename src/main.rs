// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Circograph CLI entrypoint.
//!
//! Reads a connectivity matrix and an atlas, computes the circular layout and prints it as JSON
//! for an external renderer. `--schema` prints the JSON Schema of that document instead.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use circograph::export::{document_schema, CircosDocument};
use circograph::normalize::DegeneratePolicy;
use circograph::CircosConfig;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "circograph", version, about = "Circular connectivity layouts for brain atlases")]
struct Args {
    /// Connectivity matrix CSV (n x n, no header)
    #[arg(required_unless_present = "schema")]
    matrix: Option<PathBuf>,

    /// Atlas CSV (with header)
    #[arg(required_unless_present = "schema")]
    atlas: Option<PathBuf>,

    /// JSON config file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep normalized strengths at or above this value (0..=1)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Atlas column to group ROIs by
    #[arg(long)]
    grouping: Option<String>,

    /// Atlas column holding 1-based ROI labels
    #[arg(long)]
    label: Option<String>,

    /// Atlas column holding ROI display names
    #[arg(long)]
    roi_names: Option<String>,

    /// Atlas column holding the hemisphere
    #[arg(long)]
    hemisphere: Option<String>,

    #[arg(long)]
    left_symbol: Option<String>,

    #[arg(long)]
    right_symbol: Option<String>,

    /// Spacer nodes before the first left-hemisphere group
    #[arg(long)]
    padding: Option<usize>,

    #[arg(long)]
    point_size: Option<f64>,

    #[arg(long)]
    spacing: Option<f64>,

    /// Fail on a constant matrix instead of producing an edgeless graph
    #[arg(long, default_value_t = false)]
    reject_constant: bool,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the output JSON Schema and exit
    #[arg(long, default_value_t = false)]
    schema: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn resolve_config(args: &Args) -> circograph::Result<CircosConfig> {
    let mut config = match &args.config {
        Some(path) => CircosConfig::from_json_file(path)?,
        None => CircosConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    let columns = &mut config.columns;
    for (slot, value) in [
        (&mut columns.grouping, &args.grouping),
        (&mut columns.label, &args.label),
        (&mut columns.roi_name, &args.roi_names),
        (&mut columns.hemisphere, &args.hemisphere),
        (&mut columns.left_symbol, &args.left_symbol),
        (&mut columns.right_symbol, &args.right_symbol),
    ] {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
    if let Some(padding) = args.padding {
        config.sequencer.padding_size = padding;
    }
    if let Some(point_size) = args.point_size {
        config.geometry.point_size = point_size;
    }
    if let Some(spacing) = args.spacing {
        config.geometry.spacing = spacing;
    }
    if args.reject_constant {
        config.degenerate = DegeneratePolicy::Reject;
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = (|| -> Result<(), Box<dyn Error>> {
        let json = if args.schema {
            serde_json::to_string_pretty(&document_schema()?)?
        } else {
            let (Some(matrix), Some(atlas)) = (&args.matrix, &args.atlas) else {
                return Err("matrix and atlas paths are required".into());
            };
            let config = resolve_config(&args)?;
            let layout = circograph::build_from_files(matrix, atlas, &config)?;
            CircosDocument::from_layout(&layout).to_json_pretty()?
        };

        match &args.output {
            Some(path) => std::fs::write(path, json + "\n")?,
            None => println!("{json}"),
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("circograph: {err}");
        std::process::exit(1);
    }
}
