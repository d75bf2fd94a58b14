//! Scan configuration options

/// Conventional location of model definition files relative to the
/// application root
pub const DEFAULT_MODELS_DIR: &str = "common/models";

/// Configuration for a model directory scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Walk subdirectories of the models directory
    pub recursive: bool,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether subdirectories are walked
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { recursive: true }
    }
}
