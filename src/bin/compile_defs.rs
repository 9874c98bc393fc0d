//! Compile a directory of field-definition files into Rust structs or JSON.
//!
//! Usage:
//!   compile_defs [OPTIONS] DIR
//!
//! Records that fail to compile are reported and left out of the output;
//! the exit code is 1 if any record failed.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use fieldlayout::catalog::{self, CatalogOptions};
use fieldlayout::{compile_all, render, Layout};
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Rust,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Compile field-definition files into record layouts")]
struct Args {
    /// Directory holding one definition file per record type
    dir: PathBuf,
    /// Extension of definition files
    #[arg(long, default_value = "def")]
    ext: String,
    /// Record type to leave out (repeatable)
    #[arg(long)]
    skip: Vec<String>,
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,
    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = CatalogOptions {
        extension: args.ext,
        skip: args.skip,
    };
    let records = catalog::load_dir(&args.dir, &options)
        .with_context(|| format!("loading definitions from {}", args.dir.display()))?;

    let mut layouts: Vec<Layout> = Vec::with_capacity(records.len());
    let mut failed = 0usize;
    for result in compile_all(&records) {
        match result {
            Ok(layout) => layouts.push(layout),
            Err(e) => {
                warn!("{}", e);
                failed += 1;
            }
        }
    }
    info!("compiled {} record types, {} failed", layouts.len(), failed);

    let rendered = match args.format {
        Format::Rust => render::render_rust(&layouts),
        Format::Json => serde_json::to_string_pretty(&layouts).context("serializing layouts")?,
    };

    match &args.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing to stdout")?,
    }

    if failed > 0 {
        eprintln!("compile_defs: {} record type(s) failed", failed);
        std::process::exit(1);
    }
    Ok(())
}
