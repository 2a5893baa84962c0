//! Checks scanned manifests against the replacement table

use crate::RuleTable;
use better_import_deps::ScannedPackage;
use serde::Serialize;
use std::path::PathBuf;

/// A dependency that has a better alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementSuggestion {
    /// Package name as declared
    pub package_name: String,
    /// Version range as declared
    pub current_version: String,
    /// Suggestion message from the matching rule
    pub suggestion: String,
    /// package.json the dependency was found in
    pub source: PathBuf,
}

/// Applies a [`RuleTable`] to scanned packages
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    table: &'a RuleTable,
}

impl Checker<'static> {
    /// Checker over the built-in rule table
    pub fn built_in() -> Self {
        Self::new(RuleTable::built_in())
    }
}

impl Default for Checker<'static> {
    fn default() -> Self {
        Self::built_in()
    }
}

impl<'a> Checker<'a> {
    /// Checker over a custom table
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Suggestion for a single package name
    pub fn check_package(&self, package_name: &str) -> Option<&'static str> {
        self.table.lookup(package_name)
    }

    /// Suggestions for one package, in `all_dependencies` order
    pub fn check_dependencies(&self, package: &ScannedPackage) -> Vec<ReplacementSuggestion> {
        package
            .all_dependencies
            .iter()
            .filter_map(|(name, version)| {
                self.check_package(name).map(|suggestion| ReplacementSuggestion {
                    package_name: name.clone(),
                    current_version: version.clone(),
                    suggestion: suggestion.to_string(),
                    source: package.path.clone(),
                })
            })
            .collect()
    }

    /// Suggestions for every package, package by package.
    ///
    /// The same dependency in two manifests produces two suggestions.
    pub fn check_all_packages(&self, packages: &[ScannedPackage]) -> Vec<ReplacementSuggestion> {
        packages
            .iter()
            .flat_map(|package| self.check_dependencies(package))
            .collect()
    }
}

/// Suggestion for a single package name from the built-in table
pub fn check_package(package_name: &str) -> Option<&'static str> {
    Checker::built_in().check_package(package_name)
}

/// Built-in suggestions for one scanned package
pub fn check_dependencies(package: &ScannedPackage) -> Vec<ReplacementSuggestion> {
    Checker::built_in().check_dependencies(package)
}

/// Built-in suggestions for every scanned package
pub fn check_all_packages(packages: &[ScannedPackage]) -> Vec<ReplacementSuggestion> {
    Checker::built_in().check_all_packages(packages)
}
