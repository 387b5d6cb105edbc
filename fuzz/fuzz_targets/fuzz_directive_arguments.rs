#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

use docket::{BuiltinKind, ClassDeclaration, DeclarationSource, DirectiveRegistry, Resolver};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(arguments) = std::str::from_utf8(rest) else {
        return;
    };
    let kind = BuiltinKind::ALL[selector as usize % BuiltinKind::ALL.len()];

    // Every scope a kind may appear on should parse without panicking
    let source = DeclarationSource::new().with_class(
        ClassDeclaration::new("Fuzz\\Target")
            .with_directive(kind.name(), arguments)
            .with_method_directive("run", kind.name(), arguments)
            .with_property("field", Some("Field"))
            .with_property_directive("field", kind.name(), arguments),
    );
    let resolver = Resolver::new(Arc::new(DirectiveRegistry::builtin()), Arc::new(source));
    let _ = resolver.resolve_members("Fuzz\\Target", &["run"], &["field"]);
});
