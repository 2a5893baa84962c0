//! Property tests for rule lookup

use better_import_deps::{PackageJson, ScannedPackage};
use better_import_rules::{check_dependencies, check_package, BETTER_ALTERNATIVES};
use proptest::prelude::*;

#[test]
fn every_rule_returns_its_message() {
    for rule in BETTER_ALTERNATIVES {
        assert_eq!(check_package(rule.name), Some(rule.message), "rule {}", rule.name);
    }
}

proptest! {
    #[test]
    fn unknown_names_have_no_suggestion(name in "[a-z@/._-]{1,40}") {
        prop_assume!(!BETTER_ALTERNATIVES.iter().any(|rule| rule.name == name));
        prop_assert_eq!(check_package(&name), None);
    }

    #[test]
    fn uppercased_names_never_match(index in 0..BETTER_ALTERNATIVES.len()) {
        let upper = BETTER_ALTERNATIVES[index].name.to_uppercase();
        prop_assert_eq!(check_package(&upper), None);
    }

    #[test]
    fn suggestions_are_the_matching_subset_in_order(
        names in proptest::collection::vec(
            prop_oneof![
                Just("axios".to_string()),
                Just("lodash".to_string()),
                Just("moment".to_string()),
                "[a-z]{3,12}-pkg",
            ],
            0..12,
        )
    ) {
        let mut manifest = PackageJson::default();
        let deps = manifest.dependencies.get_or_insert_with(Default::default);
        for (i, name) in names.iter().enumerate() {
            deps.entry(name.clone()).or_insert_with(|| format!("^{}.0.0", i));
        }
        let package = ScannedPackage::new("/repo/package.json", manifest);

        let expected: Vec<&String> = package
            .all_dependencies
            .keys()
            .filter(|name| check_package(name).is_some())
            .collect();
        let suggestions = check_dependencies(&package);
        let actual: Vec<&String> = suggestions.iter().map(|s| &s.package_name).collect();

        prop_assert_eq!(actual, expected);
    }
}
