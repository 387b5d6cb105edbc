//! Property tests for directive argument handling.

use std::sync::Arc;

use proptest::prelude::*;

use docket::{
    BuiltinKind, ClassDeclaration, DeclarationSource, DirectiveRegistry, FailureKind, Resolver,
};

fn kind() -> impl Strategy<Value = BuiltinKind> {
    proptest::sample::select(BuiltinKind::ALL.to_vec())
}

fn resolve_one(kind: BuiltinKind, arguments: &str) -> Result<docket::ResolutionResult, docket::SetupFailure> {
    let source = DeclarationSource::new().with_class(
        ClassDeclaration::new("App\\Widget")
            .with_property("service", Some("Service"))
            .with_method_directive("run", kind.name(), arguments),
    );
    Resolver::new(Arc::new(DirectiveRegistry::builtin()), Arc::new(source))
        .resolve_members("App\\Widget", &["run"], &["service"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary argument text never panics; failures are
    /// grammar or validation failures attributed to the directive.
    #[test]
    fn property_arbitrary_arguments_never_panic(
        kind in kind(),
        arguments in "\\PC{0,40}",
    ) {
        match resolve_one(kind, &arguments) {
            Ok(result) => prop_assert!(!result.excluded),
            Err(err) => {
                prop_assert!(matches!(err.kind, FailureKind::Grammar | FailureKind::Validation));
                prop_assert_eq!(err.directive.as_deref(), Some(kind.name()));
                prop_assert_eq!(err.member.as_str(), "run");
            }
        }
    }

    /// PROPERTY: Well-formed bag names always resolve to themselves.
    #[test]
    fn property_valid_bag_names_resolve(
        names in proptest::collection::vec("[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8})?", 1..5),
    ) {
        let mut decl = ClassDeclaration::new("Bags");
        for name in &names {
            decl = decl.with_method_directive("load", "databag", name);
        }
        let source = DeclarationSource::new().with_class(decl);
        let result = Resolver::new(Arc::new(DirectiveRegistry::builtin()), Arc::new(source))
            .resolve_members("Bags", &["load"], &[])
            .unwrap();
        prop_assert_eq!(result.member("load").unwrap().list("bags"), Some(&names[..]));
    }

    /// PROPERTY: Callback parameters are stored without their sigil.
    #[test]
    fn property_callback_params_lose_sigil(
        params in proptest::collection::vec("[a-z][a-zA-Z0-9_]{0,8}", 0..4),
    ) {
        let arguments = std::iter::once("handler".to_string())
            .chain(params.iter().map(|p| format!("${}", p)))
            .collect::<Vec<_>>()
            .join(" ");
        let result = resolve_one(BuiltinKind::Before, &arguments).unwrap();
        let calls = result.member("run").unwrap().calls("__before").unwrap();
        prop_assert_eq!(&calls["handler"], &params);
    }
}
