use crate::descriptor::Snapshot;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Loader for descriptor snapshot documents.
///
/// Files ending in `.yaml` or `.yml` are read as YAML, everything else as JSON.
///
/// # Example
///
/// ```no_run
/// use service_doclet::parser::SnapshotParser;
/// use std::path::Path;
///
/// let parsed = SnapshotParser::parse_file(Path::new("descriptors/api.json")).unwrap();
/// println!("Loaded {} classes", parsed.snapshot.classes.len());
/// ```
pub struct SnapshotParser;

/// A successfully loaded snapshot.
#[derive(Debug)]
pub struct ParsedSnapshot {
    /// Path to the snapshot file
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

impl SnapshotParser {
    /// Loads a single snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Snapshot`] naming the file if it cannot be read or decoded.
    pub fn parse_file(path: &Path) -> Result<ParsedSnapshot> {
        debug!("Parsing snapshot: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| Error::snapshot(path, format!("failed to read file: {}", e)))?;

        let snapshot = Self::parse_str(&content, is_yaml(path)).map_err(|message| Error::snapshot(path, message))?;

        debug!(
            "Loaded {} classes from {}",
            snapshot.classes.len(),
            path.display()
        );

        Ok(ParsedSnapshot {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    /// Loads every file, stopping at the first one that fails.
    pub fn parse_files(paths: &[PathBuf]) -> Result<Vec<ParsedSnapshot>> {
        debug!("Parsing {} snapshots", paths.len());
        paths.iter().map(|path| Self::parse_file(path)).collect()
    }

    fn parse_str(content: &str, yaml: bool) -> std::result::Result<Snapshot, String> {
        if yaml {
            serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {}", e))
        } else {
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref(),
        Some("yaml") | Some("yml")
    )
}
