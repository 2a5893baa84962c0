//! Output formatters for replacement suggestions.

pub mod human;
pub mod json;

use anyhow::Result;
use better_import_rules::ReplacementSuggestion;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Trait for rendering suggestions
pub trait Formatter {
    /// Render the suggestions as the text printed to stdout
    fn format(&self, suggestions: &[ReplacementSuggestion]) -> Result<String>;
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// `--json` selects JSON, anything else the table
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Human => Box::new(HumanFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
