//! Monorepo manifest scanner

use crate::error::{Error, Result, SkippedManifestError};
use crate::npm::parser::{read_manifest, MANIFEST_FILE};
use crate::npm::workspace::NpmWorkspace;
use crate::types::ScannedPackage;
use better_import_fs::FileSystem;
use futures::future::join_all;
use std::sync::Arc;

/// Outcome of a scan, including the member manifests that were left out
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Root manifest first, then workspace members in discovery order
    pub packages: Vec<ScannedPackage>,
    /// Member manifests that failed to read or parse
    pub skipped: Vec<SkippedManifestError>,
}

/// Discovers the root manifest and every workspace member manifest
pub struct ManifestScanner<F: FileSystem> {
    fs: Arc<F>,
}

impl<F: FileSystem> ManifestScanner<F> {
    /// Create a scanner over a filesystem rooted at the working directory
    pub fn new(fs: Arc<F>) -> Self {
        Self { fs }
    }

    /// Scan the monorepo and return its packages, root first.
    ///
    /// # Errors
    /// Returns [`Error::ManifestNotFound`] if the root package.json is missing
    /// or invalid. Broken member manifests are skipped.
    pub async fn scan(&self) -> Result<Vec<ScannedPackage>> {
        Ok(self.scan_with_report().await?.packages)
    }

    /// Like [`ManifestScanner::scan`], but also reports skipped members.
    ///
    /// # Errors
    /// Returns [`Error::ManifestNotFound`] if the root package.json is missing
    /// or invalid
    pub async fn scan_with_report(&self) -> Result<ScanReport> {
        let fs = self.fs.as_ref();
        let root_path = fs.project_root().join(MANIFEST_FILE);

        let root_manifest = read_manifest(fs, &root_path)
            .await
            .map_err(|source| Error::ManifestNotFound {
                path: root_path.clone(),
                source,
            })?;

        let patterns = NpmWorkspace::patterns(fs, &root_manifest).await;
        let mut report = ScanReport {
            packages: vec![ScannedPackage::new(root_path, root_manifest)],
            skipped: vec![],
        };

        if patterns.is_empty() {
            tracing::debug!("No workspace patterns, scanning root package only");
            return Ok(report);
        }

        let members = NpmWorkspace::find_members(fs, &patterns).await;
        tracing::debug!(count = members.len(), "Discovered workspace manifests");

        // join_all yields results in input order, not completion order
        let reads = members.into_iter().map(|path| async move {
            let result = read_manifest(fs, &path).await;
            (path, result)
        });

        for (path, result) in join_all(reads).await {
            match result {
                Ok(manifest) => report.packages.push(ScannedPackage::new(path, manifest)),
                Err(reason) => {
                    tracing::debug!(path = %path.display(), error = %reason, "Skipping workspace manifest");
                    report.skipped.push(SkippedManifestError { path, reason });
                }
            }
        }

        Ok(report)
    }
}

/// Scan the monorepo rooted at `cwd` on the native filesystem.
///
/// # Errors
/// Returns [`Error::ManifestNotFound`] if `cwd` has no valid package.json
#[cfg(feature = "native-fs")]
pub async fn scan_packages(cwd: impl AsRef<std::path::Path>) -> Result<Vec<ScannedPackage>> {
    Ok(scan_packages_with_report(cwd).await?.packages)
}

/// Like [`scan_packages`], but also reports skipped member manifests.
///
/// # Errors
/// Returns [`Error::ManifestNotFound`] if `cwd` has no valid package.json
#[cfg(feature = "native-fs")]
pub async fn scan_packages_with_report(cwd: impl AsRef<std::path::Path>) -> Result<ScanReport> {
    use better_import_fs::NativeFileSystem;

    let cwd = cwd.as_ref();
    let fs = NativeFileSystem::new(cwd).map_err(|e| Error::ManifestNotFound {
        path: cwd.join(MANIFEST_FILE),
        source: e.into(),
    })?;

    ManifestScanner::new(Arc::new(fs)).scan_with_report().await
}
