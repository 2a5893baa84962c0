//! FileSystem trait for read-only manifest access.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem abstraction.
///
/// Every operation is async so the scanner can suspend at read points:
/// - **Native**: blocking std::fs calls run on tokio's blocking pool
/// - **Memory**: operations complete immediately
///
/// Relative paths are resolved against [`FileSystem::project_root`].
///
/// ## Error Handling
///
/// Uses `std::io::Result<T>`:
/// - Native: direct mapping from std::fs errors
/// - Memory: `io::Error` built with the matching `ErrorKind`
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::NotFound` if file doesn't exist.
    /// Returns `io::ErrorKind::InvalidData` if file is not valid UTF-8.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Expand a glob pattern relative to the project root.
    ///
    /// Only regular files are returned, as absolute paths in sorted order.
    /// `*` and `?` never cross a path separator; `**` matches any number of
    /// directories. Wildcards never match a name that starts with `.`.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::InvalidInput` if the pattern is not a valid glob.
    async fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>>;

    /// Get the project root this filesystem is scoped to.
    fn project_root(&self) -> &Path;

    /// Resolve a path against the project root.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root().join(path)
        }
    }
}

/// Prefix `pattern` with the escaped project root.
pub(crate) fn rooted_pattern(root: &Path, pattern: &str) -> io::Result<String> {
    let root = root.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Project root is not valid UTF-8: {}", root.display()),
        )
    })?;
    let root = glob::Pattern::escape(root.trim_end_matches(std::path::MAIN_SEPARATOR));
    Ok(format!("{}{}{}", root, std::path::MAIN_SEPARATOR, pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_pattern_escapes_root() {
        let pattern = rooted_pattern(Path::new("/work/[repo]"), "packages/*/package.json").unwrap();
        assert_eq!(pattern, "/work/[[]repo[]]/packages/*/package.json");
    }
}
