//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::registry::BuiltinKind;
use crate::error::{DocketError, DocketResult};

use super::types::Config;

const PROJECT_CONFIG: &str = ".docket/config.toml";
const USER_CONFIG: &str = "docket/config.toml";

/// Non-fatal configuration warning (unknown key, with a typo suggestion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DocketResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DocketError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown configuration key"
        );
    }

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG);
        if let Some(config) = try_load(&project_config) {
            return with_env_overrides(config);
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join(USER_CONFIG);
        if let Some(config) = try_load(&user_config) {
            return with_env_overrides(config);
        }
    }

    with_env_overrides(Config::default())
}

fn try_load(path: &Path) -> Option<Config> {
    if !path.exists() {
        return None;
    }
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "ignoring unreadable configuration");
            None
        }
    }
}

/// Apply environment variable overrides (DOCKET_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DOCKET_ENABLED
    if let Some(value) = lookup("DOCKET_ENABLED") {
        match parse_bool(&value) {
            Some(enabled) => config.resolver.enabled = enabled,
            None => tracing::warn!(
                value = %value,
                "invalid DOCKET_ENABLED value, expected true/false/1/0"
            ),
        }
    }

    // DOCKET_DISABLED_DIRECTIVES (comma-separated)
    if let Some(value) = lookup("DOCKET_DISABLED_DIRECTIVES") {
        config.directives.disabled = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter(|name| {
                let known = BuiltinKind::from_name(name).is_some();
                if !known {
                    tracing::warn!(
                        directive = %name,
                        "unknown directive in DOCKET_DISABLED_DIRECTIVES"
                    );
                }
                known
            })
            .map(str::to_string)
            .collect();
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolver",
        "enabled",
        "syntax",
        "parameter_sigil",
        "attribute_sigil",
        "namespace_separator",
        "directives",
        "disabled",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
