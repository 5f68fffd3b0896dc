//! Configuration loading

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{
    CanvasLocks, ConfigWarning, ModuleId, ModuleRef, TechCanvasConfig, TemplateId,
};
use crate::error::{SlotwiseError, SlotwiseResult};

use super::types::{CanvasConfig, LoadedConfig};

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "canvas.toml";

/// On-disk shape. The template stays a string here so a typo can be reported
/// with a suggestion instead of a bare serde error.
#[derive(Debug, Default, Deserialize)]
struct CanvasConfigFile {
    #[serde(default)]
    tech: TechSection,
    org: Option<CanvasLocks>,
    platform: Option<CanvasLocks>,
}

#[derive(Debug, Default, Deserialize)]
struct TechSection {
    template: Option<String>,
    #[serde(default)]
    enabled: BTreeSet<ModuleRef>,
    #[serde(default)]
    disabled: BTreeSet<ModuleRef>,
}

pub fn load_with_warnings(path: &Path) -> SlotwiseResult<(CanvasConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config text; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> SlotwiseResult<(CanvasConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: CanvasConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(display_key(&p.to_string()));
    })
    .map_err(|e| SlotwiseError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let template_id = match file.tech.template.as_deref() {
        None => TemplateId::default(),
        Some(name) => parse_template(name, &path.display().to_string())?,
    };

    let config = CanvasConfig {
        tech: TechCanvasConfig {
            template_id,
            enabled_overrides: file.tech.enabled,
            disabled_overrides: file.tech.disabled,
        },
        org: file.org,
        platform: file.platform,
    };

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest(&key, KEY_CANDIDATES),
                key: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    let module_names: Vec<&str> = ModuleId::ALL.iter().map(ModuleId::as_str).collect();
    for module in config.unknown_modules() {
        warnings.push(ConfigWarning {
            key: module.as_str().to_string(),
            file: path.to_path_buf(),
            line: find_line_number(content, module.as_str()),
            suggestion: suggest(module.as_str(), &module_names),
        });
    }

    Ok((config, warnings))
}

/// Locate the config to use: an explicit path, `./canvas.toml`, then the user
/// config dir. Falls back to defaults when nothing is found.
pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> SlotwiseResult<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SlotwiseError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_from(path);
    }

    let candidates = [
        Some(working_dir.join(CONFIG_FILE_NAME)),
        user_config_path(),
    ];
    for candidate in candidates.into_iter().flatten() {
        if candidate.exists() {
            return load_from(&candidate);
        }
    }

    tracing::debug!("no canvas config found, using defaults");
    Ok(LoadedConfig::default())
}

fn load_from(path: &Path) -> SlotwiseResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    tracing::info!(path = %path.display(), warnings = warnings.len(), "loaded canvas config");
    Ok(LoadedConfig {
        config,
        warnings,
        source: Some(path.to_path_buf()),
    })
}

/// `<config dir>/slotwise/canvas.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slotwise").join(CONFIG_FILE_NAME))
}

/// Apply environment variable overrides (SLOTWISE_* prefix) to the operator layer
pub fn with_env_overrides(mut config: CanvasConfig) -> SlotwiseResult<CanvasConfig> {
    // SLOTWISE_TEMPLATE
    if let Ok(name) = std::env::var("SLOTWISE_TEMPLATE") {
        config.tech.template_id = parse_template(name.trim(), "SLOTWISE_TEMPLATE")?;
    }

    // SLOTWISE_ENABLE / SLOTWISE_DISABLE (comma-separated)
    if let Ok(list) = std::env::var("SLOTWISE_ENABLE") {
        config.tech.enabled_overrides.extend(parse_module_list(&list));
    }
    if let Ok(list) = std::env::var("SLOTWISE_DISABLE") {
        config.tech.disabled_overrides.extend(parse_module_list(&list));
    }

    Ok(config)
}

pub fn parse_module_list(list: &str) -> impl Iterator<Item = ModuleRef> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ModuleRef::parse)
}

fn parse_template(name: &str, source_name: &str) -> SlotwiseResult<TemplateId> {
    TemplateId::parse(name).ok_or_else(|| {
        let names: Vec<&str> = TemplateId::ALL.iter().map(TemplateId::as_str).collect();
        SlotwiseError::UnknownTemplate {
            name: name.to_string(),
            source_name: source_name.to_string(),
            suggestion: suggest(name, &names),
        }
    })
}

const KEY_CANDIDATES: &[&str] = &[
    "tech",
    "org",
    "platform",
    "template",
    "enabled",
    "disabled",
    "force_enabled",
    "force_disabled",
];

/// `org.?.force_disabeld` -> `org.force_disabeld`; `?` marks an `Option` hop
fn display_key(path: &str) -> String {
    path.split('.')
        .filter(|segment| *segment != "?")
        .collect::<Vec<_>>()
        .join(".")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest(unknown: &str, candidates: &[&str]) -> Option<String> {
    let max_distance = (unknown.len() / 4).max(2);
    candidates
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .filter(|(_, dist)| *dist <= max_distance)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
