//! User-defined preset registries
//!
//! The builtin table covers the application's standard renditions; a
//! registry lets a deployment add or override presets from a YAML or JSON
//! file without recompiling. File entries use the same string tokens the
//! URL carries (`crop: fill`, `format: webp`, `quality: "auto"`).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::TransformError;
use crate::transform::options::{CropMode, OutputFormat, Quality, TransformOptions};
use crate::transform::preset::{builtin_presets, canonical_name};
use crate::transform::url::optimize_url;

/// Errors raised while loading a registry file
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("preset '{name}': {source}")]
    InvalidPreset {
        name: String,
        source: TransformError,
    },
}

/// One preset entry as written in a registry file.
///
/// Absent `width`/`height` are omitted from the segment; absent
/// `crop`/`format`/`quality` fall back to the standard defaults
/// (`fill`, `webp`, `auto`). Unrecognized keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFileEntry {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub crop: Option<CropMode>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// "auto" or a fixed value "1"-"100"
    #[serde(default)]
    pub quality: Option<String>,
}

impl PresetFileEntry {
    fn into_options(self) -> Result<TransformOptions, TransformError> {
        let quality = match self.quality {
            Some(raw) => raw.parse()?,
            None => Quality::Auto,
        };

        Ok(TransformOptions {
            width: self.width,
            height: self.height,
            crop: Some(self.crop.unwrap_or_default()),
            format: Some(self.format.unwrap_or_default()),
            quality: Some(quality),
        })
    }
}

/// Registry file shape: a single `presets` map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    presets: HashMap<String, PresetFileEntry>,
}

/// Name-to-options map: the builtin table plus any user-defined entries.
///
/// User entries win over builtins of the same name. The registry is built
/// once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, TransformOptions>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        let presets = builtin_presets()
            .map(|(name, options)| (name.to_string(), *options))
            .collect();
        Self { presets }
    }
}

impl PresetRegistry {
    /// Load user presets from a file, merged over the builtins.
    ///
    /// Files with a `.json` extension are parsed as JSON, everything else
    /// as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        if path.extension().map_or(false, |ext| ext == "json") {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_yaml::from_str(raw)?;
        Self::from_entries(file.presets)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(raw)?;
        Self::from_entries(file.presets)
    }

    fn from_entries(entries: HashMap<String, PresetFileEntry>) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for (name, entry) in entries {
            let options = entry
                .into_options()
                .map_err(|source| RegistryError::InvalidPreset {
                    name: name.clone(),
                    source,
                })?;
            registry.presets.insert(name, options);
        }
        Ok(registry)
    }

    /// Look up a preset, accepting legacy camelCase spellings
    pub fn get(&self, name: &str) -> Option<&TransformOptions> {
        self.presets
            .get(name)
            .or_else(|| self.presets.get(canonical_name(name)))
    }

    /// Registered preset names, in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Apply a registered preset to `url`.
    ///
    /// Same policy as [`crate::apply_preset`]: unknown names emit a single
    /// warning and pass the URL through unchanged.
    pub fn apply(&self, url: &str, name: &str) -> String {
        match self.get(name) {
            Some(options) => optimize_url(url, options),
            None => {
                warn!(preset = name, "unknown rendition preset, returning URL unchanged");
                url.to_string()
            }
        }
    }
}
