//! Model scanning engine
//!
//! Turns a directory of JSON model definitions into in-memory descriptors.
//! Each scan is a single pass: discover files, parse each one, fold the
//! `(path, document)` pairs into the result vector. Nothing is cached
//! between calls.

pub mod config;

use crate::discovery;
use crate::error::ScanResult;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub use config::{ScanConfig, DEFAULT_MODELS_DIR};

/// Summary of one discovered model definition file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Path of the source file as enumerated
    pub filename: PathBuf,
    /// The document's top-level `name` field, if it is a string
    pub name: Option<String>,
    /// Keys of the document's `properties` object, in document order
    pub property_seeds: Vec<String>,
}

impl ModelDescriptor {
    /// Build a descriptor from a parsed model document. Missing or
    /// wrongly-typed fields degrade to `None` / empty rather than erroring.
    fn from_document(filename: PathBuf, document: &Value) -> Self {
        let name = document
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let property_seeds = document
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            filename,
            name,
            property_seeds,
        }
    }
}

/// Projection of caller-requested fields out of one model document.
/// Requested fields absent from the document are omitted.
pub type RequestedFields = Map<String, Value>;

/// Scans a directory of JSON model definitions
pub struct ModelScanner {
    config: ScanConfig,
}

impl ModelScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `dir` for model definitions and describe each one.
    ///
    /// Fails fast: the first IO or parse error aborts the scan and is
    /// returned to the caller.
    pub fn scan_models(&self, dir: &Path) -> ScanResult<Vec<ModelDescriptor>> {
        let descriptors = self
            .documents(dir)?
            .into_iter()
            .map(|(path, doc)| ModelDescriptor::from_document(path, &doc))
            .collect();
        Ok(descriptors)
    }

    /// Scan `dir` and project only the requested top-level fields out of
    /// each model document, in requested order. Fields a document does not
    /// have are left out of its map.
    ///
    /// Same fail-fast semantics as [`scan_models`](Self::scan_models).
    pub fn scan_models_with_fields(
        &self,
        dir: &Path,
        fields: &[&str],
    ) -> ScanResult<Vec<RequestedFields>> {
        let projections = self
            .documents(dir)?
            .into_iter()
            .map(|(_, doc)| {
                let mut requested = Map::new();
                for &field in fields {
                    if let Some(value) = doc.get(field) {
                        requested.insert(field.to_owned(), value.clone());
                    }
                }
                requested
            })
            .collect();
        Ok(projections)
    }

    /// Scan `dir` and return just the model names, in enumeration order.
    ///
    /// Unlike the other operations this one recovers locally: any underlying
    /// failure is logged and an empty vector is returned. Documents without
    /// a `name` field are skipped.
    pub fn scan_model_names(&self, dir: &Path) -> Vec<String> {
        match self.scan_models(dir) {
            Ok(models) => models.into_iter().filter_map(|m| m.name).collect(),
            Err(err) => {
                tracing::error!(error = %err.user_message(), "model scan failed");
                Vec::new()
            }
        }
    }

    /// Discover and parse every model file under `dir`, fail-fast
    fn documents(&self, dir: &Path) -> ScanResult<Vec<(PathBuf, Value)>> {
        discovery::find_model_files(dir, self.config.recursive)?
            .into_iter()
            .map(|path| discovery::read_model_document(&path).map(|doc| (path, doc)))
            .collect()
    }
}

impl Default for ModelScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}
