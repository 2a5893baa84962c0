//! Error types for better-import-deps

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using better-import-deps Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a scan.
///
/// Only the root manifest can fail a scan; everything else degrades to a
/// [`SkippedManifestError`].
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Root package.json is missing, unreadable, or not valid JSON
    #[error("No package.json found in current directory")]
    #[diagnostic(
        code(better_import::manifest_not_found),
        help("run the command from a directory that contains a package.json")
    )]
    ManifestNotFound {
        /// Path that was expected to hold the root manifest
        path: PathBuf,
        /// Why the manifest could not be loaded
        #[source]
        source: ManifestError,
    },
}

/// Why a single manifest could not be loaded
#[derive(Debug, Error)]
pub enum ManifestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A workspace member manifest that was left out of the scan results
#[derive(Debug, Error)]
#[error("Skipped {}: {reason}", .path.display())]
pub struct SkippedManifestError {
    /// Path of the member manifest
    pub path: PathBuf,
    /// Read or parse failure
    #[source]
    pub reason: ManifestError,
}
