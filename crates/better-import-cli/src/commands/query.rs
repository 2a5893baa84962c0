use super::Outcome;
use anyhow::Result;
use better_import_rules::check_package;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use std::io::Write;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Package name to query
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Look up one package in the replacement table.
pub fn handle_query_command(args: &QueryArgs, out: &mut dyn Write) -> Result<Outcome> {
    let package = args.package.as_str();

    let Some(suggestion) = check_package(package) else {
        if args.json {
            writeln!(out, "{}", json!({ "found": false, "package": package }))?;
        } else {
            writeln!(
                out,
                "{}",
                format!("✓ No better alternative found for {}", package.bold()).green()
            )?;
        }
        return Ok(Outcome::Clean);
    };

    if args.json {
        let body = json!({
            "found": true,
            "package": package,
            "suggestion": suggestion,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        writeln!(out, "{}", package.bold().yellow())?;
        writeln!(out, "{}", "───────────────────────".dimmed())?;
        writeln!(out, "{}", suggestion)?;
    }

    Ok(Outcome::Flagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(package: &str, json: bool) -> (Outcome, String) {
        colored::control::set_override(false);
        let args = QueryArgs {
            package: package.to_string(),
            json,
        };
        let mut out = Vec::new();
        let outcome = handle_query_command(&args, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_query_found() {
        let (outcome, output) = query("axios", false);
        assert_eq!(outcome, Outcome::Flagged);
        assert_eq!(
            output,
            "axios\n───────────────────────\nUse https://www.npmjs.com/package/ky instead.\n"
        );
    }

    #[test]
    fn test_query_not_found() {
        let (outcome, output) = query("express", false);
        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(output, "✓ No better alternative found for express\n");
    }

    #[test]
    fn test_query_json() {
        let (outcome, output) = query("lodash", true);
        assert_eq!(outcome, Outcome::Flagged);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["found"], true);
        assert_eq!(parsed["package"], "lodash");
        assert_eq!(parsed["suggestion"], "Use https://es-toolkit.slash.page instead.");

        let (outcome, output) = query("express", true);
        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(output, "{\"found\":false,\"package\":\"express\"}\n");
    }
}
