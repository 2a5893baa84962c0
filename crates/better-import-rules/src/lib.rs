//! better-import rules - static replacement table and dependency checker
//!
//! The checker is pure: it takes packages produced by `better-import-deps`
//! and returns suggestions for every dependency that has a rule.
//!
//! # Example
//!
//! ```
//! use better_import_rules::check_package;
//!
//! assert!(check_package("axios").is_some());
//! assert_eq!(check_package("react"), None);
//! ```

pub mod built_in;
pub mod checker;
pub mod table;

// Re-export core types
pub use built_in::BETTER_ALTERNATIVES;
pub use checker::{
    check_all_packages, check_dependencies, check_package, Checker, ReplacementSuggestion,
};
pub use table::{ReplacementRule, RuleTable};
