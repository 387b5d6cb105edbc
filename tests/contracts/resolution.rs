//! Resolution shape contracts (RESOLVE-001 through RESOLVE-004)

use crate::common::*;
use docket::{AttributeValue, CLASS_MEMBER};

fn di_entries(pairs: &[(&str, &str)]) -> AttributeValue {
    AttributeValue::Injections(
        pairs
            .iter()
            .map(|(attr, class)| (attr.to_string(), class.to_string()))
            .collect(),
    )
}

/// CONTRACT RESOLVE-001: Excluded class
///
/// A class whose class scope is excluded resolves to `(true, {}, [])`, no
/// matter what its methods declare.
mod excluded_class {
    use super::*;

    #[test]
    fn contract_excluded_class_yields_empty_result() {
        let result = app_resolver()
            .resolve_members(CLASS_EXCLUDED, &["doNot", "withBags", "cbSingle"], &[])
            .unwrap();

        assert!(result.excluded);
        assert!(result.attributes.is_empty());
        assert!(result.protected.is_empty());
    }

    #[test]
    fn contract_excluded_class_ignores_property_injections() {
        let result = app_resolver()
            .resolve_members(
                CLASS_EXCLUDED,
                &["withBags"],
                &["colorService", "textService", "fontService"],
            )
            .unwrap();

        assert!(result.excluded);
        assert!(result.attributes.is_empty());
    }

    #[test]
    fn contract_exclude_false_keeps_class() {
        let result = app_resolver()
            .resolve_members(CLASS_ANNOTATED, &[], &[])
            .unwrap();
        assert!(!result.excluded);
    }
}

/// CONTRACT RESOLVE-002: Class attributes live under "*"
///
/// Property injections are seeded into the class scope first, so `__di`
/// is always the first key of "*" when any property injects.
mod class_member {
    use super::*;

    #[test]
    fn contract_class_attributes_keep_declaration_order() {
        let result = app_resolver()
            .resolve_members(
                CLASS_ANNOTATED,
                &[],
                &["colorService", "textService", "fontService"],
            )
            .unwrap();

        let class = result.class_attributes().expect("class attributes");
        assert_eq!(
            class.keys().collect::<Vec<_>>(),
            vec!["__di", "bags", "__before", "__after"]
        );
        assert_eq!(
            class.get("__di"),
            Some(&di_entries(&[
                ("colorService", "App\\Service\\ColorService"),
                ("textService", "App\\Service\\TextService"),
                ("fontService", "App\\Ajax\\FontService"),
            ]))
        );
        assert_eq!(
            class.list("bags"),
            Some(&["user.name".to_string(), "page.number".to_string()][..])
        );
        assert_eq!(
            class
                .calls("__after")
                .map(|calls| calls.keys().cloned().collect::<Vec<_>>()),
            Some(vec![
                "funcAfter1".to_string(),
                "funcAfter2".to_string(),
                "funcAfter3".to_string()
            ])
        );
    }

    #[test]
    fn contract_class_without_attributes_has_no_star_entry() {
        let result = app_resolver()
            .resolve_members(ANNOTATED, &["saveFiles"], &[])
            .unwrap();
        assert!(result.member(CLASS_MEMBER).is_none());
        assert!(result.member("saveFiles").is_some());
    }
}

/// CONTRACT RESOLVE-003: Protected methods
///
/// Excluded methods appear in the protected list, in caller order, and
/// never in the attribute map.
mod protected_methods {
    use super::*;

    #[test]
    fn contract_excluded_method_is_protected_not_stored() {
        let result = app_resolver()
            .resolve_members(ANNOTATED, &["doNot", "withBags"], &[])
            .unwrap();

        assert!(result.is_protected("doNot"));
        assert!(result.member("doNot").is_none());
        assert!(!result.is_protected("withBags"));
        assert_eq!(result.protected.len(), 1);
    }

    #[test]
    fn contract_methods_without_directives_are_omitted() {
        let result = app_resolver()
            .resolve_members(ANNOTATED, &["undeclared", "saveFiles"], &[])
            .unwrap();
        assert_eq!(
            result.attributes.keys().collect::<Vec<_>>(),
            vec!["saveFiles"]
        );
        assert!(result.protected.is_empty());
    }
}

/// CONTRACT RESOLVE-004: Determinism
///
/// Resolving the same target twice yields equal results.
mod determinism {
    use super::*;

    #[test]
    fn contract_resolution_is_repeatable() {
        let resolver = app_resolver();
        let source = app_source();
        let target = source.target(ANNOTATED).unwrap();
        let first = resolver.resolve(&target).unwrap();
        let second = resolver.resolve(&target).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
    }
}
