//! Setup failure contracts (FAILURE-001 through FAILURE-003)
//!
//! Any grammar or validation error aborts resolution of the whole class and
//! names the class, the member and the offending directive.

use crate::common::*;
use docket::{FailureKind, ScopeKind, SetupFailure};

fn fail(class: &str, method: &str) -> SetupFailure {
    app_resolver()
        .resolve_members(class, &[method], &[])
        .expect_err(method)
}

/// CONTRACT FAILURE-001: Grammar errors
///
/// Argument text with the wrong token shape fails before validation.
mod grammar {
    use super::*;

    #[test]
    fn contract_malformed_arguments_are_grammar_failures() {
        for (method, directive) in [
            ("doNotError", "exclude"),
            ("withBagsError", "databag"),
            ("saveFilesUnquoted", "upload"),
            ("cbBeforeNoCall", "before"),
            ("cbAfterNoCall", "after"),
            ("diTooManyTokens", "di"),
        ] {
            let err = fail(BROKEN, method);
            assert_eq!(err.kind, FailureKind::Grammar, "{}: {}", method, err);
            assert_eq!(err.directive.as_deref(), Some(directive));
            assert_eq!(err.scope, ScopeKind::Method);
            assert_eq!(err.member, method);
        }
    }

    #[test]
    fn contract_no_call_message() {
        assert_eq!(
            fail(BROKEN, "cbBeforeNoCall").to_string(),
            "cannot set up App\\Ajax\\Broken (method 'cbBeforeNoCall'): \
             @before: no call given in callback directive"
        );
    }
}

/// CONTRACT FAILURE-002: Validation errors
///
/// Well-shaped arguments with unacceptable values fail validation.
mod validation {
    use super::*;

    #[test]
    fn contract_bad_values_are_validation_failures() {
        for (method, reason) in [
            ("saveFilesWrongName", "invalid upload field name '1files'"),
            ("saveFilesMultiple", "multiple upload directives on one method"),
            (
                "cbBeforeUnknownAttr",
                "unknown parameter reference 'param1' in callback directive",
            ),
            ("cbAfterWrongName", "invalid call name '9lives'"),
            ("diUnknownAttr", "di directive missing class/type"),
            (
                "diWrongAttrType",
                "expected an attribute reference, found 'colorService'",
            ),
        ] {
            let err = fail(BROKEN, method);
            assert_eq!(err.kind, FailureKind::Validation, "{}: {}", method, err);
            assert!(
                err.reason.ends_with(reason),
                "{}: expected '{}' in '{}'",
                method,
                reason,
                err.reason
            );
        }
    }

    #[test]
    fn contract_method_only_directive_on_class_fails() {
        let err = app_resolver()
            .resolve_members(UPLOAD_ON_CLASS, &[], &[])
            .unwrap_err();
        assert_eq!(err.scope, ScopeKind::Class);
        assert_eq!(
            err.to_string(),
            "cannot set up App\\Ajax\\UploadOnClass (class): \
             @upload: the upload directive is not allowed on a class scope"
        );
    }

    #[test]
    fn contract_property_di_rejects_attribute_reference() {
        let err = app_resolver()
            .resolve_members(BROKEN_PROPERTY, &[], &["mailer"])
            .unwrap_err();
        assert_eq!(err.scope, ScopeKind::Property);
        assert_eq!(err.member, "mailer");
        assert!(err
            .reason
            .ends_with("only one property allowed on a property-scope di directive"));
    }
}

/// CONTRACT FAILURE-003: Failures are all-or-nothing
///
/// One broken member fails the class even when other members are valid,
/// and unknown classes fail without a directive.
mod all_or_nothing {
    use super::*;

    #[test]
    fn contract_one_broken_method_fails_the_class() {
        let err = app_resolver()
            .resolve_members(BROKEN, &["doNotError", "saveFilesMultiple"], &[])
            .unwrap_err();
        assert_eq!(err.member, "doNotError");
    }

    #[test]
    fn contract_unknown_class_is_a_source_failure() {
        let err = app_resolver()
            .resolve_members("App\\Nowhere", &["run"], &[])
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::Source);
        assert_eq!(err.directive, None);
    }
}
