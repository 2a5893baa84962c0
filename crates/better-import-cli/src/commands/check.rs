use super::Outcome;
use crate::formatters::OutputFormat;
use anyhow::{Context, Result};
use better_import_deps::scan_packages_with_report;
use better_import_rules::check_all_packages;
use clap::Args;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Working directory (defaults to the current directory)
    #[arg(long, value_name = "PATH", env = "BETTER_IMPORT_CWD")]
    pub cwd: Option<PathBuf>,
}

/// Scan the monorepo and print every dependency with a better alternative.
///
/// Progress and skipped manifests go to stderr; the report goes to `out`.
pub fn handle_check_command(args: &CheckArgs, verbose: bool, out: &mut dyn Write) -> Result<Outcome> {
    let cwd = match &args.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    eprintln!("{}", "Scanning packages...".dimmed());
    let report = runtime.block_on(scan_packages_with_report(&cwd))?;
    tracing::debug!(
        packages = report.packages.len(),
        skipped = report.skipped.len(),
        "Scan finished"
    );

    if verbose {
        for skipped in &report.skipped {
            eprintln!("{} {}", "warning:".yellow(), skipped);
        }
    }

    let suggestions = check_all_packages(&report.packages);
    let output = OutputFormat::from_json_flag(args.json)
        .formatter()
        .format(&suggestions)?;
    writeln!(out, "{}", output)?;

    Ok(if suggestions.is_empty() {
        Outcome::Clean
    } else {
        Outcome::Flagged
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, json: bool) -> CheckArgs {
        CheckArgs {
            json,
            cwd: Some(dir.path().to_path_buf()),
        }
    }

    #[test]
    fn test_check_flags_workspace_dependencies() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "root", "workspaces": ["packages/*"], "dependencies": { "axios": "^1.0.0" } }"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("packages/app")).unwrap();
        fs::write(
            dir.path().join("packages/app/package.json"),
            r#"{ "name": "app", "devDependencies": { "lodash": "^4.17.0", "react": "^18.0.0" } }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let outcome = handle_check_command(&args(&dir, true), false, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Flagged);

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let names: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["packageName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["axios", "lodash"]);
        assert!(parsed[1]["source"]
            .as_str()
            .unwrap()
            .ends_with("package.json"));
    }

    #[test]
    fn test_check_clean_repository() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "dependencies": { "react": "^18.0.0" } }"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let outcome = handle_check_command(&args(&dir, true), false, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_check_without_manifest_fails() {
        let dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        let err = handle_check_command(&args(&dir, false), false, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "No package.json found in current directory");
        assert!(out.is_empty());
    }
}
