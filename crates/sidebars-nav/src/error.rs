//! Error types for sidebar loading and lookup.

use std::path::PathBuf;

use crate::ValidationReport;

/// Sidebar error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// No sidebar registered under the product key.
    #[error("Sidebar not found: {0}")]
    NotFound(String),
    /// No sidebar references the document slug.
    #[error("Document is not referenced by any sidebar: {0}")]
    DocumentNotFound(String),
    /// Construction rules violated.
    #[error("{0}")]
    Validation(#[from] ValidationReport),
    /// Sidebar file extension is not a known source format.
    #[error("Unsupported sidebar file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
