//! Discovery and parsing of model definition files

pub mod filter;

use crate::error::{ScanError, ScanResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find model definition files in a directory. If recursive is true, walk
/// subdirectories with walkdir; otherwise list the directory itself.
///
/// Order is whatever the underlying enumeration yields; callers must not
/// assume sorting.
pub fn find_model_files(dir: &Path, recursive: bool) -> ScanResult<Vec<PathBuf>> {
    let mut model_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if filter::is_model_file(path) {
                model_files.push(path.to_path_buf());
            }
        }
    } else {
        let entries =
            fs::read_dir(dir).map_err(|e| ScanError::io(e, Some(dir.to_path_buf())))?;
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::io(e, Some(dir.to_path_buf())))?;
            let path = entry.path();
            if filter::is_model_file(&path) {
                model_files.push(path);
            }
        }
    }

    Ok(model_files)
}

/// Read one model definition file and parse it as JSON.
///
/// The returned document keeps its keys in insertion order, which is what
/// property-seed extraction relies on.
pub fn read_model_document(path: &Path) -> ScanResult<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScanError::io(e, Some(path.to_path_buf())))?;

    serde_json::from_str(&contents).map_err(|e| {
        ScanError::parse(path.to_path_buf(), e.to_string(), error_location(&e))
    })
}

/// Extract the (line, column) of a parse failure, when serde_json knows it
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}
