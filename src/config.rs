use crate::cli::Args;
use crate::core::error::ProbeError;
use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::probe::DEFAULT_PROMPT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional overrides read from `~/.gemini-probe/config.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub prompt: Option<String>,
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(".gemini-probe").join("config.yaml")
    }

    pub fn load() -> Result<Config, ProbeError> {
        Self::load_from(&Self::config_path())
    }

    /// A missing or empty file is the same as no overrides.
    pub fn load_from(path: &Path) -> Result<Config, ProbeError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yml::from_str::<Config>(&contents)
            .map_err(|e| ProbeError::Config(format!("Parse {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Everything one probe run needs, after merging CLI, environment and file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub prompt: String,
}

impl ProbeSettings {
    /// Precedence is CLI flag, then environment (key only), then config file,
    /// then built-in default. There is no built-in key.
    pub fn resolve(
        args: &Args,
        env_api_key: Option<String>,
        config: Config,
    ) -> Result<Self, ProbeError> {
        let non_empty = |key: &String| !key.is_empty();
        let api_key = args
            .api_key
            .clone()
            .filter(non_empty)
            .or(env_api_key.filter(non_empty))
            .or(config.api_key.filter(non_empty))
            .ok_or_else(|| {
                ProbeError::Config(format!(
                    "no API key configured; pass --api-key, set {} or add api_key to {}",
                    API_KEY_ENV,
                    Config::config_path().display()
                ))
            })?;

        let model = args
            .model
            .clone()
            .or(config.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = args
            .base_url
            .clone()
            .or(config.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let prompt = args
            .prompt
            .clone()
            .or(config.prompt)
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
            prompt,
        })
    }
}
