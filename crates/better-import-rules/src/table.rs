//! Immutable replacement rule table

use crate::built_in::BETTER_ALTERNATIVES;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILT_IN: LazyLock<RuleTable> = LazyLock::new(|| RuleTable::new(BETTER_ALTERNATIVES));

/// A package name paired with the suggestion shown when it is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReplacementRule {
    /// Exact package name
    pub name: &'static str,
    /// Human-readable suggestion
    pub message: &'static str,
}

/// Read-only lookup table over a static list of rules.
///
/// Lookups are exact and case-sensitive: `@scope/pkg` only matches a rule for
/// `@scope/pkg`. When a name appears twice the later rule wins.
#[derive(Debug)]
pub struct RuleTable {
    rules: &'static [ReplacementRule],
    by_name: HashMap<&'static str, &'static str>,
}

impl RuleTable {
    /// Build a table from a static rule list
    pub fn new(rules: &'static [ReplacementRule]) -> Self {
        let by_name = rules.iter().map(|rule| (rule.name, rule.message)).collect();
        Self { rules, by_name }
    }

    /// The table bundled with better-import, built on first use
    pub fn built_in() -> &'static RuleTable {
        &BUILT_IN
    }

    /// Suggestion for `package_name`, if a rule matches
    pub fn lookup(&self, package_name: &str) -> Option<&'static str> {
        self.by_name
            .get(package_name)
            .copied()
            .filter(|message| !message.is_empty())
    }

    /// Rules in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    /// Number of declared rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
