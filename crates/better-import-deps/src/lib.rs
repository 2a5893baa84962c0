//! # better-import-deps
//!
//! Manifest discovery and dependency aggregation for JavaScript monorepos.
//!
//! This crate provides functionality to:
//! - Read the root `package.json` of a repository
//! - Resolve workspace members from `pnpm-workspace.yaml` or the `workspaces` field
//! - Merge each manifest's dependency groupings into one ordered map
//!
//! Only a missing or invalid root manifest fails a scan. Member manifests that
//! can't be read or parsed are skipped and listed in [`ScanReport::skipped`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use better_import_deps::scan_packages;
//!
//! # async fn example() -> better_import_deps::Result<()> {
//! let packages = scan_packages(".").await?;
//!
//! for package in &packages {
//!     println!("{}", package.path.display());
//!     for (name, version) in &package.all_dependencies {
//!         println!("  {}: {}", name, version);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod npm;
pub mod scanner;
pub mod types;

// Re-export main types
pub use error::{Error, ManifestError, Result, SkippedManifestError};
pub use types::{DependencyMap, DependencyType, PackageJson, ScannedPackage, WorkspaceConfig};

pub use npm::{read_manifest, NpmWorkspace};
pub use scanner::{ManifestScanner, ScanReport};

#[cfg(feature = "native-fs")]
pub use scanner::{scan_packages, scan_packages_with_report};
