// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cardscan — command line entry point.
//
// Initialises logging, loads the scanner config and field layout, extracts
// one card, and prints the record as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use cardscan_core::{CardScanConfig, CardScanError, FieldLayout};
use cardscan_document::CardExtractor;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cardscan")]
#[command(about = "Extract labelled fields and barcode geometry from a scanned card")]
struct Args {
    /// Card PDF (text is read from page 1)
    #[arg(long)]
    pdf: PathBuf,

    /// Rasterized image of the same page
    #[arg(long)]
    image: PathBuf,

    /// Field layout JSON (labels by kind, plus their printed order)
    #[arg(long)]
    fields: PathBuf,

    /// Scanner config TOML; built-in card geometry is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "Card rejected");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CardScanError> {
    let config = match &args.config {
        Some(path) => CardScanConfig::load(path)?,
        None => CardScanConfig::default(),
    };
    let layout = FieldLayout::load(&args.fields)?;

    tracing::info!(pdf = %args.pdf.display(), image = %args.image.display(), "cardscan starting");

    let record = CardExtractor::new(config, &layout)?.extract_files(&args.pdf, &args.image)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    Ok(json)
}
