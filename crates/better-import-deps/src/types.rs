//! Core types for manifest scanning

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Ordered mapping from package name to version-range string
pub type DependencyMap = IndexMap<String, String>;

/// Type of dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyType {
    /// Runtime dependency (`dependencies`)
    Runtime,
    /// Development dependency (`devDependencies`)
    Dev,
    /// Peer dependency (`peerDependencies`)
    Peer,
    /// Optional dependency (`optionalDependencies`)
    Optional,
}

impl DependencyType {
    /// All groupings in merge precedence order
    pub const ALL: [DependencyType; 4] = [
        DependencyType::Runtime,
        DependencyType::Dev,
        DependencyType::Peer,
        DependencyType::Optional,
    ];
}

/// The subset of package.json that better-import reads
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Declared package name
    #[serde(default)]
    pub name: Option<String>,

    /// Declared package version
    #[serde(default)]
    pub version: Option<String>,

    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: Option<DependencyMap>,

    /// Development dependencies
    #[serde(default)]
    pub dev_dependencies: Option<DependencyMap>,

    /// Peer dependencies
    #[serde(default)]
    pub peer_dependencies: Option<DependencyMap>,

    /// Optional dependencies
    #[serde(default)]
    pub optional_dependencies: Option<DependencyMap>,

    /// npm/yarn/bun workspace declaration
    #[serde(default)]
    pub workspaces: Option<WorkspaceConfig>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Dependencies declared in one grouping, if the field is present
    pub fn dependencies_of_type(&self, dep_type: DependencyType) -> Option<&DependencyMap> {
        match dep_type {
            DependencyType::Runtime => self.dependencies.as_ref(),
            DependencyType::Dev => self.dev_dependencies.as_ref(),
            DependencyType::Peer => self.peer_dependencies.as_ref(),
            DependencyType::Optional => self.optional_dependencies.as_ref(),
        }
    }

    /// Merge all four groupings into one map.
    ///
    /// Groupings are visited in [`DependencyType::ALL`] order and the first
    /// occurrence of a name wins, so a runtime version shadows a dev version
    /// of the same package.
    pub fn all_dependencies(&self) -> DependencyMap {
        let mut merged = DependencyMap::new();

        for dep_type in DependencyType::ALL {
            let Some(deps) = self.dependencies_of_type(dep_type) else {
                continue;
            };
            for (name, version) in deps {
                if !merged.contains_key(name) {
                    merged.insert(name.clone(), version.clone());
                }
            }
        }

        merged
    }

    /// Workspace patterns declared in the `workspaces` field
    pub fn workspace_patterns(&self) -> &[String] {
        self.workspaces
            .as_ref()
            .map(WorkspaceConfig::patterns)
            .unwrap_or(&[])
    }
}

/// The two accepted shapes of the `workspaces` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceConfig {
    /// `"workspaces": ["packages/*"]`
    Patterns(Vec<String>),
    /// `"workspaces": { "packages": ["packages/*"], "nohoist": [...] }`
    Extended {
        /// Member patterns
        #[serde(default)]
        packages: Vec<String>,
        /// Yarn v1 hoisting exclusions (not used for discovery)
        #[serde(default)]
        nohoist: Vec<String>,
    },
    /// Anything else; contributes no patterns
    Unsupported(serde_json::Value),
}

impl WorkspaceConfig {
    /// Flat, ordered list of member patterns
    pub fn patterns(&self) -> &[String] {
        match self {
            WorkspaceConfig::Patterns(patterns) => patterns,
            WorkspaceConfig::Extended { packages, .. } => packages,
            WorkspaceConfig::Unsupported(_) => &[],
        }
    }
}

/// A manifest found during a scan, with its merged dependencies
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedPackage {
    /// Absolute path to the package.json
    pub path: PathBuf,
    /// Parsed manifest
    pub manifest: PackageJson,
    /// Deduplicated dependencies in merge precedence order
    pub all_dependencies: DependencyMap,
}

impl ScannedPackage {
    /// Build a scanned package, computing the merged dependency map
    pub fn new(path: impl Into<PathBuf>, manifest: PackageJson) -> Self {
        let all_dependencies = manifest.all_dependencies();
        Self {
            path: path.into(),
            manifest,
            all_dependencies,
        }
    }

    /// Declared package name
    pub fn name(&self) -> Option<&str> {
        self.manifest.name.as_deref()
    }

    /// Path to the package.json
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_shadows_dev() {
        let manifest = PackageJson::parse(
            r#"{
                "dependencies": { "axios": "^1.0.0" },
                "devDependencies": { "axios": "^0.27.0", "vitest": "^2.0.0" }
            }"#,
        )
        .unwrap();

        let merged = manifest.all_dependencies();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["axios"], "^1.0.0");
        assert_eq!(merged["vitest"], "^2.0.0");
    }

    #[test]
    fn test_merge_order_follows_precedence_then_file_order() {
        let manifest = PackageJson::parse(
            r#"{
                "optionalDependencies": { "dep4": "^4.0.0", "dep1": "^9.9.9" },
                "peerDependencies": { "dep3": "^3.0.0" },
                "devDependencies": { "dep2": "^2.0.0" },
                "dependencies": { "zeta": "1", "dep1": "^1.0.0" }
            }"#,
        )
        .unwrap();

        let merged = manifest.all_dependencies();
        let names: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "dep1", "dep2", "dep3", "dep4"]);
        assert_eq!(merged["dep1"], "^1.0.0");
    }

    #[test]
    fn test_missing_and_null_groupings() {
        let manifest =
            PackageJson::parse(r#"{ "name": "bare", "dependencies": null }"#).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("bare"));
        assert!(manifest.all_dependencies().is_empty());
        assert!(manifest.workspace_patterns().is_empty());
    }

    #[test]
    fn test_workspace_array_shape() {
        let manifest =
            PackageJson::parse(r#"{ "workspaces": ["packages/*", "apps/*"] }"#).unwrap();
        assert_eq!(manifest.workspace_patterns(), ["packages/*", "apps/*"]);
    }

    #[test]
    fn test_workspace_object_shape() {
        let manifest = PackageJson::parse(
            r#"{ "workspaces": { "packages": ["apps/*"], "nohoist": ["**/react-native"] } }"#,
        )
        .unwrap();
        assert_eq!(manifest.workspace_patterns(), ["apps/*"]);
        assert!(matches!(
            manifest.workspaces,
            Some(WorkspaceConfig::Extended { .. })
        ));
    }

    #[test]
    fn test_workspace_unsupported_shape_has_no_patterns() {
        let manifest = PackageJson::parse(r#"{ "workspaces": "packages/*" }"#).unwrap();
        assert!(manifest.workspace_patterns().is_empty());
    }

    #[test]
    fn test_non_string_version_is_rejected() {
        assert!(PackageJson::parse(r#"{ "dependencies": { "axios": 1 } }"#).is_err());
        assert!(PackageJson::parse("null").is_err());
        assert!(PackageJson::parse("{ not json").is_err());
    }

    #[test]
    fn test_scanned_package_computes_merge() {
        let manifest =
            PackageJson::parse(r#"{ "name": "app", "peerDependencies": { "react": "*" } }"#)
                .unwrap();
        let scanned = ScannedPackage::new("/repo/package.json", manifest);
        assert_eq!(scanned.name(), Some("app"));
        assert_eq!(scanned.path(), Path::new("/repo/package.json"));
        assert_eq!(scanned.all_dependencies["react"], "*");
    }
}
