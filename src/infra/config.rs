// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the summarize-and-chat service.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
        }
    }
}

/// The selectable model set is configuration data, not a constant: the
/// service-side roster changes without a client release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Wire id new sessions start with.
    pub default: String,

    #[serde(default)]
    pub available: Vec<ModelEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Human-readable label shown in pickers.
    pub label: String,
    /// Identifier sent to the backend.
    pub id: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: "moonshotai/kimi-vl-a3b-thinking:free".into(),
            available: vec![
                ModelEntry {
                    label: "LLama-3.3".into(),
                    id: "meta-llama/llama-3.3-70b-instruct:free".into(),
                },
                ModelEntry {
                    label: "Mistral".into(),
                    id: "mistralai/mistral-nemo:free".into(),
                },
                ModelEntry {
                    label: "Kimi VL".into(),
                    id: "moonshotai/kimi-vl-a3b-thinking:free".into(),
                },
                ModelEntry {
                    label: "MT5 Small".into(),
                    id: "mt5-small".into(),
                },
            ],
        }
    }
}

impl ModelsConfig {
    /// Resolve a label or wire id to a wire id. Labels match
    /// case-insensitively; an exact wire id passes through.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some(entry) = self.available.iter().find(|e| e.id == name) {
            return Some(&entry.id);
        }
        self.available
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(name))
            .map(|e| e.id.as_str())
    }

    /// Label for a wire id, if the id is part of the configured set.
    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.available
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.label.as_str())
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
