//! High score persistence.
//!
//! The file holds one `score<TAB>name` line per entry. Loading never fails:
//! a missing or unreadable file yields the default table, and malformed
//! lines are skipped with a warning on stderr. Saving writes a sibling
//! temporary file and renames it over the target.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use tui_bloc_core as core;

use crate::core::HighScoreTable;

/// Default file name, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "scores.txt";

/// Read the table at `path`, falling back to defaults on any problem.
pub fn load(path: &Path) -> HighScoreTable {
    match try_load(path) {
        Ok(Some(table)) => table,
        Ok(None) => HighScoreTable::defaults(),
        Err(e) => {
            eprintln!("[Scores] {e:#}; using default high scores");
            HighScoreTable::defaults()
        }
    }
}

/// Read the table at `path`. `Ok(None)` if the file does not exist.
pub fn try_load(path: &Path) -> Result<Option<HighScoreTable>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("reading high scores from {}", path.display()))
        }
    };

    let table = HighScoreTable::parse_with(&text, |line_no, line| {
        eprintln!(
            "[Scores] {}:{line_no}: skipping malformed line {line:?}",
            path.display()
        );
    });
    Ok(Some(table))
}

/// Write the table to `path`.
pub fn save(table: &HighScoreTable, path: &Path) -> Result<()> {
    let tmp = temp_path(path);
    fs::write(&tmp, table.to_string())
        .with_context(|| format!("writing high scores to {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| {
        format!(
            "replacing {} with {}",
            path.display(),
            tmp.display()
        )
    })?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_SCORES_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("/var/games/scores.txt"));
        assert_eq!(tmp, Path::new("/var/games/scores.txt.tmp"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!(
            "tui-bloc-missing-{}.txt",
            std::process::id()
        ));
        assert!(try_load(&path).unwrap().is_none());
        assert_eq!(load(&path), HighScoreTable::defaults());
    }
}
