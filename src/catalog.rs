//! Load definition sets from a directory: one file per record type.
//!
//! Each file holds one raw definition per line. Blank lines and lines starting
//! with `#` or `//` are ignored. The record name is the file stem without a
//! trailing `_ST`.

use crate::ast::RecordDefinitions;
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record {name} defined by both {first} and {second}")]
    DuplicateRecord {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Options for [`load_dir`].
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// File extension of definition files, without the dot.
    pub extension: String,
    /// Record names to leave out (case-insensitive).
    pub skip: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            extension: "def".to_string(),
            skip: Vec::new(),
        }
    }
}

/// Record name for a definition file: its stem, minus a trailing `_ST`.
pub fn record_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = stem.strip_suffix("_ST").unwrap_or(stem);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Split file contents into raw definitions.
pub fn parse_definitions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}

/// Read every definition file in `dir` (not recursive). Records come back sorted by name.
pub fn load_dir(dir: &Path, options: &CatalogOptions) -> Result<Vec<RecordDefinitions>, CatalogError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| CatalogError::Io { path, source }
    };

    let mut found: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some(options.extension.as_str()) {
            continue;
        }
        let Some(name) = record_name(&path) else {
            debug!("{}: no usable record name", path.display());
            continue;
        };
        if options.skip.iter().any(|s| s.eq_ignore_ascii_case(&name)) {
            warn!("skipping record {} ({})", name, path.display());
            continue;
        }
        found.push((name, path));
    }
    found.sort();

    for pair in found.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(CatalogError::DuplicateRecord {
                name: pair[0].0.clone(),
                first: pair[0].1.clone(),
                second: pair[1].1.clone(),
            });
        }
    }

    let mut records = Vec::with_capacity(found.len());
    for (name, path) in found {
        let text = std::fs::read_to_string(&path).map_err(io_err(&path))?;
        let definitions = parse_definitions(&text);
        debug!("{}: {} definitions", name, definitions.len());
        records.push(RecordDefinitions { name, definitions });
    }
    info!("loaded {} record types from {}", records.len(), dir.display());
    Ok(records)
}
