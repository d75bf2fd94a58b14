//! Integration tests for projecting requested fields out of model documents

use assert_matches::assert_matches;
use model_scan::{scan_models_with_fields, ScanError};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_model(dir: &Path, filename: &str, contents: &str) {
    let mut f = File::create(dir.join(filename)).unwrap();
    write!(f, "{}", contents).unwrap();
}

#[test]
fn test_only_requested_fields_are_kept() {
    let td = TempDir::new().unwrap();
    write_model(
        td.path(),
        "widget.json",
        r#"{"name": "Widget", "base": "PersistedModel", "extra": 1}"#,
    );

    let projections = scan_models_with_fields(td.path(), &["name", "base"]).unwrap();
    assert_eq!(projections.len(), 1);

    let fields = &projections[0];
    assert_eq!(fields.get("name"), Some(&json!("Widget")));
    assert_eq!(fields.get("base"), Some(&json!("PersistedModel")));
    assert!(!fields.contains_key("extra"));
}

#[test]
fn test_absent_requested_field_is_omitted() {
    let td = TempDir::new().unwrap();
    write_model(td.path(), "widget.json", r#"{"name": "Widget"}"#);

    let projections = scan_models_with_fields(td.path(), &["name", "plural"]).unwrap();
    let fields = &projections[0];
    assert_eq!(fields.len(), 1);
    assert!(!fields.contains_key("plural"));
}

#[test]
fn test_fields_come_back_in_requested_order() {
    let td = TempDir::new().unwrap();
    write_model(
        td.path(),
        "widget.json",
        r#"{"base": "PersistedModel", "name": "Widget", "properties": {}}"#,
    );

    let projections =
        scan_models_with_fields(td.path(), &["name", "base", "properties"]).unwrap();
    let keys: Vec<_> = projections[0].keys().cloned().collect();
    assert_eq!(keys, vec!["name", "base", "properties"]);
}

#[test]
fn test_structured_values_survive_projection() {
    let td = TempDir::new().unwrap();
    write_model(
        td.path(),
        "widget.json",
        r#"{"name": "Widget", "properties": {"id": {"type": "string", "id": true}}}"#,
    );

    let projections = scan_models_with_fields(td.path(), &["properties"]).unwrap();
    let properties = &projections[0]["properties"];
    assert_eq!(properties["id"]["type"], json!("string"));
}

#[test]
fn test_malformed_file_fails_the_scan() {
    let td = TempDir::new().unwrap();
    write_model(td.path(), "broken.json", "{");

    let result = scan_models_with_fields(td.path(), &["name"]);
    assert_matches!(result, Err(ScanError::Parse { .. }));
}

#[test]
fn test_missing_directory_is_io_error() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("gone");
    let result = scan_models_with_fields(&missing, &["name"]);
    assert_matches!(result, Err(ScanError::Io { .. }));
}

#[test]
fn test_empty_request_yields_empty_maps() {
    let td = TempDir::new().unwrap();
    write_model(td.path(), "widget.json", r#"{"name": "Widget"}"#);

    let projections = scan_models_with_fields(td.path(), &[]).unwrap();
    assert_eq!(projections.len(), 1);
    assert!(projections[0].is_empty());
}
