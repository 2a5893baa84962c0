//! package.json reader

use crate::error::ManifestError;
use crate::types::PackageJson;
use better_import_fs::FileSystem;
use std::path::Path;

/// Manifest file name looked up in every package directory
pub const MANIFEST_FILE: &str = "package.json";

/// Read and parse one package.json
///
/// # Errors
/// Returns [`ManifestError::Io`] if the file can't be read and
/// [`ManifestError::Json`] if it isn't a valid manifest
pub async fn read_manifest<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> Result<PackageJson, ManifestError> {
    let content = fs.read_to_string(path).await?;
    Ok(PackageJson::parse(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use better_import_fs::MemoryFileSystem;

    #[tokio::test]
    async fn test_read_manifest() {
        let fs = MemoryFileSystem::new("/repo").unwrap().with_file(
            "package.json",
            r#"
{
  "name": "test",
  "version": "1.0.0",
  "dependencies": {
    "react": "^18.0.0"
  },
  "devDependencies": {
    "typescript": "^5.0.0"
  }
}
"#,
        );

        let manifest = read_manifest(&fs, Path::new("/repo/package.json"))
            .await
            .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("test"));
        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert_eq!(manifest.all_dependencies().len(), 2);
    }

    #[tokio::test]
    async fn test_read_manifest_errors() {
        let fs = MemoryFileSystem::new("/repo")
            .unwrap()
            .with_file("broken/package.json", "{ \"name\": ");

        let missing = read_manifest(&fs, Path::new("/repo/package.json")).await;
        assert!(matches!(missing, Err(ManifestError::Io(_))));

        let broken = read_manifest(&fs, Path::new("/repo/broken/package.json")).await;
        assert!(matches!(broken, Err(ManifestError::Json(_))));
    }
}
