//! Generator configuration
//!
//! Optional settings read from a `tfgen.toml` file that sits alongside the
//! specification:
//!
//! ```toml
//! parallel = true
//!
//! [templates]
//! to_from_primitive = "templates/to_from_primitive.go.j2"
//! ```
//!
//! Template paths are relative to the directory holding the config file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name looked up next to the specification.
pub const CONFIG_FILE_NAME: &str = "tfgen.toml";

/// Generator configuration loaded from tfgen.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Emit the schemas of each tree on a worker pool
    #[serde(default)]
    pub parallel: bool,

    /// Template name to source file, replacing the built-in template of that name
    #[serde(default)]
    pub templates: BTreeMap<String, PathBuf>,
}

impl GeneratorConfig {
    /// Read every overriding template source.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn template_sources(&self, base_dir: &Path) -> anyhow::Result<BTreeMap<String, String>> {
        self.templates
            .iter()
            .map(|(name, path)| -> anyhow::Result<(String, String)> {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    base_dir.join(path)
                };
                let source = std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read template {name:?}: {}", path.display())
                })?;
                Ok((name.clone(), source))
            })
            .collect()
    }
}

/// Load generator configuration from a TOML file
///
/// # Returns
///
/// Returns `Ok(Some(config))` if the file exists and parses successfully,
/// `Ok(None)` if the file doesn't exist (not an error),
/// `Err` if the file exists but fails to parse.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!("Failed to read generator config: {}", config_path.display())
    })?;

    let config: GeneratorConfig = toml::from_str(&contents).with_context(|| {
        format!("Failed to parse generator config: {}", config_path.display())
    })?;

    Ok(Some(config))
}

/// Resolve the generator config path
///
/// Priority:
/// 1. Explicitly provided path, if it exists
/// 2. `tfgen.toml` in the specification's directory, if it exists
/// 3. None (no config)
pub fn resolve_config_path(explicit_path: Option<&Path>, spec_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let config_path = spec_path.parent()?.join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}
