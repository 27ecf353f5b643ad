use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions of descriptor snapshot documents.
pub const SNAPSHOT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// File scanner for locating descriptor snapshots.
///
/// The input may be a single snapshot file or a directory, which is walked
/// recursively. Hidden entries (those starting with `.`) and `target`
/// directories are skipped.
///
/// # Example
///
/// ```no_run
/// use service_doclet::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./build/descriptors"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} snapshots", result.snapshot_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of a scan.
pub struct ScanResult {
    /// Snapshot files, sorted by path
    pub snapshot_files: Vec<PathBuf>,
    /// Warning messages for entries that could not be accessed
    pub warnings: Vec<String>,
}

impl FileScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Collects every snapshot file under the root path.
    ///
    /// A root that is itself a file is returned as-is, whatever its extension.
    /// Inaccessible entries are recorded as warnings and scanning continues.
    pub fn scan(&self) -> Result<ScanResult> {
        if self.root_path.is_file() {
            return Ok(ScanResult {
                snapshot_files: vec![self.root_path.clone()],
                warnings: Vec::new(),
            });
        }

        let mut snapshot_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                !file_name.starts_with('.') && file_name != "target"
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_snapshot(path) {
                        snapshot_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        snapshot_files.sort();

        Ok(ScanResult {
            snapshot_files,
            warnings,
        })
    }
}

fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SNAPSHOT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
