//! Native filesystem implementation using std::fs + tokio.

use crate::file_system::rooted_pattern;
use crate::FileSystem;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

/// Native filesystem implementation using std::fs + tokio.
///
/// This implementation wraps blocking std::fs calls with tokio::spawn_blocking
/// to avoid blocking the async runtime.
#[derive(Debug, Clone)]
pub struct NativeFileSystem {
    project_root: PathBuf,
}

impl NativeFileSystem {
    /// Create a new native filesystem rooted at `project_root`.
    ///
    /// The root is canonicalized so every path handed out by [`FileSystem::glob`]
    /// is absolute and free of `.`/`..` components.
    ///
    /// # Errors
    ///
    /// Returns an error if the root doesn't exist or can't be canonicalized.
    pub fn new(project_root: impl AsRef<Path>) -> io::Result<Self> {
        let project_root = project_root.as_ref().canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!(
                    "Project root does not exist: {}",
                    project_root.as_ref().display()
                ),
            )
        })?;

        Ok(Self { project_root })
    }
}

#[async_trait::async_trait]
impl FileSystem for NativeFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let resolved = self.resolve(path);
        task::spawn_blocking(move || std::fs::read_to_string(&resolved))
            .await
            .map_err(io::Error::other)?
    }

    async fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let full_pattern = rooted_pattern(&self.project_root, pattern)?;
        task::spawn_blocking(move || glob_sync(&full_pattern))
            .await
            .map_err(io::Error::other)?
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}

/// Synchronous glob expansion.
///
/// Entries that can't be read while walking are skipped.
fn glob_sync(full_pattern: &str) -> io::Result<Vec<PathBuf>> {
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let paths = glob::glob_with(full_pattern, options).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid glob pattern: {}", e),
        )
    })?;

    let mut matches: Vec<PathBuf> = paths.flatten().filter(|path| path.is_file()).collect();
    matches.sort();
    Ok(matches)
}
