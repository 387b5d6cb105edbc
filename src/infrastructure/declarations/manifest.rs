//! TOML declaration manifest
//!
//! ```toml
//! [[class]]
//! name = "App\\Ajax\\Annotated"
//! parent = "App\\Ajax\\Base"
//! imports = { FontService = "App\\Services\\FontService" }
//! directives = ["@exclude false", "@databag user.name"]
//!
//! [class.methods.saveFiles]
//! directives = ["@upload 'user-files'"]
//!
//! [class.properties.fontService]
//! type = "FontService"
//! directives = ["@di"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::declaration::{ClassDeclaration, DirectiveEntry, PropertyDeclaration};
use crate::error::{DocketError, DocketResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default, rename = "class")]
    classes: Vec<ManifestClass>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestClass {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    imports: IndexMap<String, String>,
    #[serde(default)]
    directives: Vec<String>,
    #[serde(default)]
    methods: IndexMap<String, ManifestMethod>,
    #[serde(default)]
    properties: IndexMap<String, ManifestProperty>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestMethod {
    #[serde(default)]
    directives: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestProperty {
    #[serde(default, rename = "type")]
    declared_type: Option<String>,
    #[serde(default)]
    directives: Vec<String>,
}

/// Parse manifest text into class declarations, in file order
pub(crate) fn parse_manifest(content: &str, file: &Path) -> DocketResult<Vec<ClassDeclaration>> {
    let invalid = |message: String| DocketError::InvalidManifest {
        file: file.to_path_buf(),
        message,
    };

    let manifest: ManifestFile = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut classes = Vec::with_capacity(manifest.classes.len());
    for class in manifest.classes {
        if !seen.insert(class.name.clone()) {
            return Err(invalid(format!("class '{}' is declared twice", class.name)));
        }

        let lines = |owner: &str, raw: &[String]| -> DocketResult<Vec<DirectiveEntry>> {
            raw.iter()
                .map(|line| {
                    DirectiveEntry::parse_line(line).ok_or_else(|| {
                        invalid(format!("empty directive line in {} of '{}'", owner, class.name))
                    })
                })
                .collect()
        };

        let mut declaration = ClassDeclaration::new(&class.name);
        if let Some(parent) = &class.parent {
            declaration = declaration.with_parent(parent);
        }
        if let Some(namespace) = &class.namespace {
            declaration = declaration.with_namespace(namespace);
        }
        for (alias, full_name) in &class.imports {
            declaration = declaration.with_import(alias, full_name);
        }
        declaration.set_directives(lines("class directives", &class.directives)?);
        for (method, body) in &class.methods {
            let directives = lines(&format!("method '{}'", method), &body.directives)?;
            declaration.set_method(method.clone(), directives);
        }
        for (property, body) in &class.properties {
            let directives = lines(&format!("property '{}'", property), &body.directives)?;
            declaration.set_property(
                property.clone(),
                PropertyDeclaration {
                    declared_type: body.declared_type.clone(),
                    directives,
                },
            );
        }

        classes.push(declaration);
    }

    Ok(classes)
}
