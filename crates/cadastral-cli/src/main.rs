//! Cadastral CLI - batch conversion of cadastral XML extracts
//!
//! Reads one or more extract files, runs them through a conversion
//! session and writes the accumulated labeled feature collections as
//! JSON to stdout or a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cadastral_core::Session;
use clap::Parser;

/// Convert cadastral XML extracts into labeled GeoJSON feature collections
#[derive(Debug, Parser)]
#[command(name = "cadastral", version)]
struct Cli {
    /// Input files; anything without an .xml extension is ignored
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the JSON output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log failed documents and continue instead of stopping at the
    /// first failure
    #[arg(long)]
    skip_errors: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let xml_files: Vec<&PathBuf> = cli.inputs.iter().filter(|path| is_xml(path)).collect();
    if xml_files.is_empty() {
        bail!("no xml files were provided");
    }

    let mut session = Session::new();
    for path in xml_files {
        match ingest_file(&mut session, path) {
            Ok(count) => log::info!("{}: {count} entities", path.display()),
            Err(e) if cli.skip_errors => log::error!("skipping {}: {e:#}", path.display()),
            Err(e) => return Err(e),
        }
    }

    let json = session
        .to_json_string(cli.pretty)
        .context("failed to encode accumulated collections")?;

    match &cli.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Read one extract and ingest it into the session
fn ingest_file(session: &mut Session, path: &Path) -> Result<usize> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    session
        .ingest_str(&xml)
        .with_context(|| format!("failed to process {}", path.display()))
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
