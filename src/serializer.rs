//! Serialization module for writing the assembled documents as JSON files.
//!
//! Each resource declaration is written to `<file id>.json` and the listing to
//! [`LISTING_FILE`], all inside the configured output directory.

use crate::document::{DocumentSet, LISTING_FILE};
use crate::error::Result;
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes a document to JSON format with pretty printing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json<T: Serialize>(doc: &T) -> Result<String> {
    debug!("Serializing document to JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Writes every declaration and then the listing into `output_dir`.
///
/// Returns the paths written, listing last. Stops at the first failure.
pub fn write_documents(set: &DocumentSet, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(set.declarations.len() + 1);

    for doc in &set.declarations {
        let path = output_dir.join(format!("{}.json", doc.file_id));
        write_to_file(&serialize_json(&doc.declaration)?, &path)?;
        written.push(path);
    }

    let path = output_dir.join(LISTING_FILE);
    write_to_file(&serialize_json(&set.listing)?, &path)?;
    written.push(path);

    Ok(written)
}
