#![no_main]

use std::path::Path;
use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(source) = docket::DeclarationSource::from_toml_str(content, Path::new("fuzz.toml"))
    else {
        return;
    };

    // Resolve every class the manifest declares, cycles included
    let names: Vec<String> = toml::from_str::<toml::Value>(content)
        .ok()
        .and_then(|value| value.get("class").and_then(|c| c.as_array()).cloned())
        .unwrap_or_default()
        .iter()
        .filter_map(|class| class.get("name").and_then(|n| n.as_str()).map(str::to_string))
        .collect();
    let targets: Vec<_> = names.iter().filter_map(|name| source.target(name)).collect();

    let resolver = docket::Resolver::new(
        Arc::new(docket::DirectiveRegistry::builtin()),
        Arc::new(source),
    );
    for target in &targets {
        let _ = resolver.resolve(target);
        let _ = resolver.fingerprint(target);
    }
});
