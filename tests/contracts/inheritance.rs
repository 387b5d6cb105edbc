//! Inheritance contracts (INHERIT-001 through INHERIT-004)
//!
//! Subclasses see the inheritable directives of their ancestors, ancestors
//! first.

use std::sync::Arc;

use docket::{ClassDeclaration, DeclarationSource, DirectiveRegistry, Resolver};

fn resolver(source: DeclarationSource) -> Resolver {
    Resolver::new(Arc::new(DirectiveRegistry::builtin()), Arc::new(source))
}

fn family() -> DeclarationSource {
    DeclarationSource::new()
        .with_class(
            ClassDeclaration::new("App\\Base")
                .with_directive("exclude", "")
                .with_directive("databag", "session")
                .with_directive("before", "authenticate")
                .with_method_directive("save", "upload", "'attachment'")
                .with_method_directive("save", "after", "audit")
                .with_property("mailer", Some("Mailer"))
                .with_property_directive("mailer", "di", ""),
        )
        .with_class(
            ClassDeclaration::new("App\\Ajax\\Orders")
                .with_parent("App\\Base")
                .with_directive("exclude", "false")
                .with_directive("databag", "cart")
                .with_method_directive("save", "after", "notify"),
        )
}

/// CONTRACT INHERIT-001: Repeatable kinds accumulate down the chain
mod accumulate {
    use super::*;

    #[test]
    fn contract_ancestor_values_come_first() {
        let result = resolver(family())
            .resolve_members("App\\Ajax\\Orders", &["save"], &["mailer"])
            .unwrap();

        let class = result.class_attributes().unwrap();
        assert_eq!(
            class.list("bags"),
            Some(&["session".to_string(), "cart".to_string()][..])
        );
        assert!(class.calls("__before").unwrap().contains_key("authenticate"));
        assert_eq!(
            class.injections("__di").unwrap()["mailer"],
            "App\\Mailer"
        );

        let save = result.member("save").unwrap();
        assert_eq!(
            save.calls("__after")
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["audit", "notify"]
        );
    }
}

/// CONTRACT INHERIT-002: Non-inherited kinds stay on the declaring class
mod not_inherited {
    use super::*;

    #[test]
    fn contract_upload_is_not_inherited() {
        let result = resolver(family())
            .resolve_members("App\\Ajax\\Orders", &["save"], &[])
            .unwrap();
        assert!(result.member("save").unwrap().text("upload").is_none());
    }
}

/// CONTRACT INHERIT-003: The nearest exclude wins
mod exclusion {
    use super::*;

    #[test]
    fn contract_subclass_can_lift_ancestor_exclusion() {
        let resolver = resolver(family());

        let base = resolver.resolve_members("App\\Base", &["save"], &[]).unwrap();
        assert!(base.excluded);

        let orders = resolver
            .resolve_members("App\\Ajax\\Orders", &["save"], &[])
            .unwrap();
        assert!(!orders.excluded);
    }

    #[test]
    fn contract_subclass_inherits_exclusion_by_default() {
        let source = family().with_class(
            ClassDeclaration::new("App\\Ajax\\Legacy").with_parent("App\\Base"),
        );
        let result = resolver(source)
            .resolve_members("App\\Ajax\\Legacy", &["save"], &[])
            .unwrap();
        assert!(result.excluded);
        assert!(result.attributes.is_empty());
    }
}

/// CONTRACT INHERIT-004: Inherited type names keep their declaring class
///
/// A relative type in an ancestor's directive resolves against the
/// ancestor's imports and namespace, not the subclass's.
mod imports {
    use super::*;

    fn split_namespaces() -> DeclarationSource {
        DeclarationSource::new()
            .with_class(
                ClassDeclaration::new("Lib\\Base")
                    .with_import("Mailer", "Vendor\\Mail\\Mailer")
                    .with_property("mailer", None)
                    .with_property_directive("mailer", "di", "Mailer")
                    .with_method_directive("send", "di", "$transport Transport"),
            )
            .with_class(
                ClassDeclaration::new("App\\Leaf")
                    .with_parent("Lib\\Base")
                    .with_method_directive("reply", "di", "$mailer Mailer"),
            )
    }

    #[test]
    fn contract_inherited_di_types_resolve_in_the_ancestor() {
        let result = resolver(split_namespaces())
            .resolve_members("App\\Leaf", &["send", "reply"], &["mailer"])
            .unwrap();

        let class_di = result.class_attributes().unwrap().injections("__di").unwrap();
        assert_eq!(class_di["mailer"], "Vendor\\Mail\\Mailer");

        let send = result.member("send").unwrap().injections("__di").unwrap();
        assert_eq!(send["transport"], "Lib\\Transport");
    }

    #[test]
    fn contract_own_di_types_resolve_in_the_subclass() {
        let result = resolver(split_namespaces())
            .resolve_members("App\\Leaf", &["reply"], &[])
            .unwrap();

        let reply = result.member("reply").unwrap().injections("__di").unwrap();
        assert_eq!(reply["mailer"], "App\\Mailer");
    }
}
