//! better-import CLI library components.
//!
//! This crate provides the command-line interface for better-import.
//! The main binary is in `main.rs`.

pub mod commands;
pub mod formatters;

// Re-export core types for convenience
pub use better_import_deps::{ScannedPackage, ScanReport};
pub use better_import_rules::ReplacementSuggestion;
