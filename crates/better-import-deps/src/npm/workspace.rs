//! npm/pnpm/yarn workspace member discovery

use super::parser::MANIFEST_FILE;
use crate::types::PackageJson;
use better_import_fs::FileSystem;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// pnpm's workspace definition file
pub const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";

const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// npm/pnpm/yarn workspace utilities
pub struct NpmWorkspace;

impl NpmWorkspace {
    /// Member patterns for the workspace rooted at the filesystem root.
    ///
    /// A `pnpm-workspace.yaml` with a non-empty `packages` list wins; otherwise
    /// the root manifest's `workspaces` field is used. An empty result means
    /// a single-package repository.
    pub async fn patterns<F: FileSystem + ?Sized>(fs: &F, root_manifest: &PackageJson) -> Vec<String> {
        let pnpm_patterns = Self::read_pnpm_patterns(fs).await;
        if !pnpm_patterns.is_empty() {
            tracing::debug!(patterns = ?pnpm_patterns, "Using {}", PNPM_WORKSPACE_FILE);
            return pnpm_patterns;
        }

        let patterns = root_manifest.workspace_patterns().to_vec();
        if !patterns.is_empty() {
            tracing::debug!(?patterns, "Using package.json workspaces");
        }
        patterns
    }

    /// `packages` from pnpm-workspace.yaml; empty when the file is missing or invalid
    pub async fn read_pnpm_patterns<F: FileSystem + ?Sized>(fs: &F) -> Vec<String> {
        #[derive(Deserialize)]
        struct PnpmWorkspace {
            #[serde(default)]
            packages: Option<Vec<String>>,
        }

        let path = fs.resolve(Path::new(PNPM_WORKSPACE_FILE));
        let content = match fs.read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => return vec![],
        };

        match serde_yaml::from_str::<PnpmWorkspace>(&content) {
            Ok(workspace) => workspace.packages.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Ignoring unparsable {}", PNPM_WORKSPACE_FILE);
                vec![]
            }
        }
    }

    /// Resolve member patterns to package.json paths.
    ///
    /// Patterns are expanded in declaration order, each one's matches in
    /// sorted order. Patterns starting with `!` exclude members. A path is
    /// listed once, at its first match, and the root manifest is never
    /// listed as a member.
    pub async fn find_members<F: FileSystem + ?Sized>(fs: &F, patterns: &[String]) -> Vec<PathBuf> {
        let root = fs.project_root().to_path_buf();

        let mut exclusions = Vec::new();
        let mut inclusions = Vec::new();
        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(excluded) => match glob::Pattern::new(&manifest_glob(excluded)) {
                    Ok(compiled) => exclusions.push(compiled),
                    Err(e) => tracing::warn!(pattern = %pattern, error = %e, "Skipping invalid workspace exclusion"),
                },
                None => inclusions.push(manifest_glob(pattern)),
            }
        }

        // The root is scanned separately; a `.` pattern must not list it twice
        let mut seen: HashSet<PathBuf> = HashSet::new();
        seen.insert(root.join(MANIFEST_FILE));

        let mut members = Vec::new();
        for pattern in inclusions {
            let matches = match fs.glob(&pattern).await {
                Ok(matches) => matches,
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "Skipping invalid workspace pattern");
                    continue;
                }
            };
            tracing::trace!(pattern = %pattern, count = matches.len(), "Expanded workspace pattern");

            for path in matches {
                let relative = path.strip_prefix(&root).unwrap_or(&path);
                if exclusions
                    .iter()
                    .any(|excluded| excluded.matches_path_with(relative, MATCH_OPTIONS))
                {
                    continue;
                }
                if seen.insert(path.clone()) {
                    members.push(path);
                }
            }
        }

        members
    }
}

/// `packages/*` -> `packages/*/package.json`
fn manifest_glob(pattern: &str) -> String {
    let mut trimmed = pattern.trim();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    let trimmed = trimmed.trim_end_matches('/');

    if trimmed.is_empty() || trimmed == "." {
        MANIFEST_FILE.to_string()
    } else {
        format!("{}/{}", trimmed, MANIFEST_FILE)
    }
}
