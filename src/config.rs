use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::ScorerConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub template_limit: usize,
    pub power_hook_limit: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            template_limit: 5,
            power_hook_limit: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    pub template_max: f64,
    pub power_hook_max: f64,
    pub seed: Option<u64>,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            template_max: 3.0,
            power_hook_max: 5.0,
            seed: None,
        }
    }
}

impl JitterConfig {
    pub fn scorer_config(&self) -> ScorerConfig {
        ScorerConfig {
            template_jitter: self.template_max,
            power_hook_jitter: self.power_hook_max,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub templates_path: PathBuf,
    pub power_hooks_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            templates_path: PathBuf::from("data/templates.json"),
            power_hooks_path: PathBuf::from("data/power-hooks.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_chars: 10,
            max_chars: 10_000,
        }
    }
}

impl InputConfig {
    /// Trims `content` and checks it against the configured length bounds.
    pub fn validate(&self, content: &str) -> Result<String, String> {
        let trimmed = content.trim();
        let length = trimmed.chars().count();
        if length < self.min_chars {
            return Err(format!(
                "content is required and must be at least {} characters",
                self.min_chars
            ));
        }
        if length > self.max_chars {
            return Err(format!(
                "content must be less than {} characters",
                self.max_chars
            ));
        }
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    pub selection: SelectionConfig,
    pub jitter: JitterConfig,
    pub corpus: CorpusConfig,
    pub input: InputConfig,
}

impl RankerConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                RankerConfig::default()
            }
        } else {
            RankerConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(limit) = env::var("TEMPLATE_LIMIT") {
            if let Ok(value) = limit.parse::<usize>() {
                self.selection.template_limit = value;
            }
        }
        if let Ok(limit) = env::var("POWER_HOOK_LIMIT") {
            if let Ok(value) = limit.parse::<usize>() {
                self.selection.power_hook_limit = value;
            }
        }
        if let Ok(seed) = env::var("JITTER_SEED") {
            if let Ok(value) = seed.parse::<u64>() {
                self.jitter.seed = Some(value);
            }
        }
        if let Ok(path) = env::var("TEMPLATES_PATH") {
            if !path.trim().is_empty() {
                self.corpus.templates_path = PathBuf::from(path);
            }
        }
        if let Ok(path) = env::var("POWER_HOOKS_PATH") {
            if !path.trim().is_empty() {
                self.corpus.power_hooks_path = PathBuf::from(path);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("HOOK_RANKER_CONFIG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/ranker.toml")))
}
