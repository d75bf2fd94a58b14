use std::path::Path;

/// Return true if the path names an existing file with a .json extension
pub fn is_model_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}
