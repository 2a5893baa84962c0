//! In-memory filesystem implementation.

use crate::file_system::rooted_pattern;
use crate::FileSystem;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// In-memory filesystem.
///
/// Files live in a sorted map keyed by absolute, normalized path, so glob
/// results come back in the same order on every call.
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<BTreeMap>>` for interior mutability:
/// - Multiple concurrent readers (common case)
/// - Exclusive writer (rare: only during setup)
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    project_root: PathBuf,
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryFileSystem {
    /// Create an empty in-memory filesystem rooted at a virtual path (e.g. "/repo").
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::InvalidInput` if the root is not absolute.
    pub fn new(project_root: impl AsRef<Path>) -> io::Result<Self> {
        let root = project_root.as_ref();
        if !root.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Project root must be absolute: {}", root.display()),
            ));
        }

        Ok(Self {
            project_root: normalize(root),
            files: Arc::new(RwLock::new(BTreeMap::new())),
        })
    }

    /// Add a file. Relative paths are placed under the project root.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let path = normalize(&self.resolve(path.as_ref()));
        self.files.write().insert(path, contents.into());
    }

    /// Builder-style variant of [`MemoryFileSystem::add_file`].
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.add_file(path, contents);
        self
    }
}

#[async_trait::async_trait]
impl FileSystem for MemoryFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = normalize(&self.resolve(path));
        self.files.read().get(&path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    async fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let full_pattern = rooted_pattern(&self.project_root, pattern)?;
        let compiled = glob::Pattern::new(&full_pattern).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid glob pattern: {}", e))
        })?;

        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        Ok(self
            .files
            .read()
            .keys()
            .filter(|path| compiled.matches_path_with(path, options))
            .cloned()
            .collect())
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}

/// Syntactic normalization: drops `.` and folds `..` without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
