//! Collect `<id> <name>` row-name tables from a directory into one JSON document.
//!
//! Usage:
//!   row_names [OPTIONS] DIR

use anyhow::Context;
use clap::Parser;
use fieldlayout::names;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Collect row-name tables into JSON")]
struct Args {
    /// Directory of `*.txt` row-name tables
    dir: PathBuf,
    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose > 0 { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let tables = names::load_dir(&args.dir)
        .with_context(|| format!("reading row names from {}", args.dir.display()))?;
    let json = serde_json::to_string_pretty(&tables).context("serializing row names")?;

    match &args.output {
        Some(path) => std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}
