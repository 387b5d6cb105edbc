//! Scenario: a host loads its manifest and configuration from disk
//!
//! The host keeps `docket.toml` next to `.docket/config.toml`, resolves
//! every declared class, and tunes behaviour through configuration.

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;

use crate::common::*;
use docket::{Config, DeclarationSource, DocketError};

fn write_project(config: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("docket.toml"), APP_MANIFEST).unwrap();
    fs::create_dir_all(dir.path().join(".docket")).unwrap();
    fs::write(dir.path().join(".docket/config.toml"), config).unwrap();
    dir
}

#[test]
fn scenario_default_project_resolves_declared_members() {
    let dir = write_project("");
    let source = DeclarationSource::load(&dir.path().join("docket.toml")).unwrap();
    let target = source.target(ANNOTATED).unwrap();

    let config = Config::load(&dir.path().join(".docket/config.toml")).unwrap();
    let resolver = config.resolver(Arc::new(source)).unwrap();
    let result = resolver.resolve(&target).unwrap();

    assert!(!result.excluded);
    assert!(result.is_protected("doNot"));
    assert_eq!(
        result.class_attributes().unwrap().injections("__di").unwrap().len(),
        3
    );
    assert_eq!(
        result.member("saveFiles").unwrap().text("upload"),
        Some("'user-files'")
    );
}

#[test]
fn scenario_disabled_directive_is_ignored() {
    let dir = write_project("[directives]\ndisabled = [\"callback\", \"upload\"]\n");
    let source = DeclarationSource::load(&dir.path().join("docket.toml")).unwrap();
    let config = Config::load(&dir.path().join(".docket/config.toml")).unwrap();
    let resolver = config.resolver(Arc::new(source)).unwrap();

    let result = resolver
        .resolve_members(ANNOTATED, &["notify", "saveFiles", "withBags"], &[])
        .unwrap();
    assert!(result.member("notify").is_none());
    assert!(result.member("saveFiles").is_none());
    assert!(result.member("withBags").is_some());

    // Disabling upload also silences its rule violations
    let broken = resolver
        .resolve_members(BROKEN, &["saveFilesMultiple", "saveFilesWrongName"], &[])
        .unwrap();
    assert!(broken.attributes.is_empty());
}

#[test]
fn scenario_disabled_resolver_returns_empty_results() {
    let dir = write_project("[resolver]\nenabled = false\n");
    let source = DeclarationSource::load(&dir.path().join("docket.toml")).unwrap();
    let config = Config::load(&dir.path().join(".docket/config.toml")).unwrap();
    let resolver = config.resolver(Arc::new(source)).unwrap();

    let result = resolver
        .resolve_members(BROKEN, &["doNotError"], &[])
        .unwrap();
    assert_eq!(result, docket::ResolutionResult::default());
}

#[test]
fn scenario_custom_sigils_from_config() {
    let dir = tempdir().unwrap();
    let manifest = r#"
[[class]]
name = "app.Reports"

[class.properties.store]
type = "Store"

[class.methods.export]
directives = ["@before guard :format", "@di @store", "@di @cache .lib.Cache"]
"#;
    fs::write(dir.path().join("docket.toml"), manifest).unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[syntax]\nparameter_sigil = \":\"\nattribute_sigil = \"@\"\nnamespace_separator = \".\"\n",
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let source = config.source(&dir.path().join("docket.toml")).unwrap();
    let resolver = config.resolver(Arc::new(source)).unwrap();
    let result = resolver
        .resolve_members("app.Reports", &["export"], &["store"])
        .unwrap();

    let export = result.member("export").unwrap();
    assert_eq!(export.calls("__before").unwrap()["guard"], vec!["format"]);
    let injections = export.injections("__di").unwrap();
    assert_eq!(injections["store"], "app.Store");
    assert_eq!(injections["cache"], "lib.Cache");
}

#[test]
fn scenario_broken_manifest_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docket.toml");
    fs::write(&path, "[[class]]\nname = \"A\"\n\n[[class]]\nname = \"A\"\n").unwrap();

    let err = DeclarationSource::load(&path).unwrap_err();
    match err {
        DocketError::InvalidManifest { file, message } => {
            assert_eq!(file, path);
            assert!(message.contains("declared twice"), "{}", message);
        }
        other => panic!("unexpected error: {}", other),
    }

    let missing = DeclarationSource::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, DocketError::InvalidManifest { .. }));
}
