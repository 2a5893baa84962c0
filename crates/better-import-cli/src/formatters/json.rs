//! JSON formatter for replacement suggestions.

use super::Formatter;
use anyhow::{Context, Result};
use better_import_rules::ReplacementSuggestion;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, suggestions: &[ReplacementSuggestion]) -> Result<String> {
        serde_json::to_string_pretty(suggestions).context("Error serializing suggestions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_json() {
        let suggestions = vec![ReplacementSuggestion {
            package_name: "axios".to_string(),
            current_version: "^1.0.0".to_string(),
            suggestion: "Use https://www.npmjs.com/package/ky instead.".to_string(),
            source: PathBuf::from("/test/package.json"),
        }];

        let output = JsonFormatter.format(&suggestions).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["packageName"], "axios");
        assert_eq!(parsed[0]["currentVersion"], "^1.0.0");
        assert_eq!(parsed[0]["source"], "/test/package.json");
        assert!(output.contains('\n'), "output should be pretty-printed");
    }

    #[test]
    fn test_format_empty_json() {
        assert_eq!(JsonFormatter.format(&[]).unwrap(), "[]");
    }
}
