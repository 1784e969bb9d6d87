// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! boxphys CLI.
//!
//! Steps a scene headless for a fixed number of ticks and prints the final
//! entity states.
//!
//! # Usage
//! ```text
//! boxphys [--scene scene.json] [--ticks 60] [--format table|json] [-v]
//! ```
//!
//! Without `--scene` a built-in demo (a walled floor and a few boxes) runs.
#![allow(clippy::print_stdout)]

mod report;
mod scene;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::RunSummary;
use crate::scene::Scene;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a boxphys scene headless")]
struct Args {
    /// JSON scene file; the built-in demo runs when omitted
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 60)]
    ticks: u64,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    let mut space = scene.into_space()?;
    info!(
        entities = space.entities().len(),
        concretes = space.concretes().len(),
        ticks = args.ticks,
        "running scene"
    );

    let mut summary = RunSummary::new(&space);
    for _ in 0..args.ticks {
        let report = space.update();
        summary.record(&report);
    }
    let summary = summary.finish(&space);

    match args.format {
        Format::Table => println!("{}", summary.to_table()),
        Format::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}
