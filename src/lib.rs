//! Model definition scanner
//!
//! Scans a directory of JSON model-definition files (the shape used by
//! LoopBack-style web frameworks) and extracts model names and declared
//! property keys into in-memory collections. Property keys come back in
//! document order, which relies on serde_json's `preserve_order` feature.

pub mod discovery;
pub mod error;
pub mod scanner;

use std::path::Path;

// Re-export commonly used types
pub use error::{ScanError, ScanResult};
pub use scanner::{ModelDescriptor, ModelScanner, RequestedFields, ScanConfig, DEFAULT_MODELS_DIR};

/// Scan a model directory with the default configuration
pub fn scan_models(dir: &Path) -> ScanResult<Vec<ModelDescriptor>> {
    ModelScanner::default().scan_models(dir)
}

/// Scan a model directory and project only the requested top-level fields
pub fn scan_models_with_fields(dir: &Path, fields: &[&str]) -> ScanResult<Vec<RequestedFields>> {
    ModelScanner::default().scan_models_with_fields(dir, fields)
}

/// Scan a model directory for model names; logs and returns empty on failure
pub fn scan_model_names(dir: &Path) -> Vec<String> {
    ModelScanner::default().scan_model_names(dir)
}

/// Scan the conventional `common/models` directory
pub fn scan_default_models() -> ScanResult<Vec<ModelDescriptor>> {
    scan_models(Path::new(DEFAULT_MODELS_DIR))
}

/// Model names from the conventional `common/models` directory
pub fn default_model_names() -> Vec<String> {
    scan_model_names(Path::new(DEFAULT_MODELS_DIR))
}
