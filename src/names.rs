//! Row-name tables: `<id> <name>` text files, one per record type.

use crate::catalog::CatalogError;
use regex::Regex;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

static ROW_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(.+)").expect("row-name pattern is valid"));

/// Row id -> row name, for one record type.
pub type RowNames = BTreeMap<u64, String>;

/// Parse one table. Lines that do not start with a row id are ignored.
pub fn parse_row_names(text: &str) -> RowNames {
    text.lines()
        .filter_map(|line| {
            let cap = ROW_LINE.captures(line)?;
            let id = cap[1].parse().ok()?;
            Some((id, cap[2].trim_end().to_string()))
        })
        .collect()
}

/// Read every `*.txt` file in `dir`, keyed by file stem.
pub fn load_dir(dir: &Path) -> Result<BTreeMap<String, RowNames>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut tables = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || path.extension().and_then(OsStr::to_str) != Some("txt") {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        let text = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        tables.insert(stem, parse_row_names(&text));
    }
    log::info!("loaded {} row-name tables from {}", tables.len(), dir.display());
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_parses_agree() {
        let text = "1 a\n2 b\n";
        assert_eq!(parse_row_names(text), parse_row_names(text));
        assert_eq!(parse_row_names(text).len(), 2);
    }

    #[test]
    fn parses_id_and_name() {
        let names = parse_row_names("10 Short Sword\n20\tLong Sword  \nnot a row\n");
        assert_eq!(names.len(), 2);
        assert_eq!(names[&10], "Short Sword");
        assert_eq!(names[&20], "Long Sword");
    }
}
