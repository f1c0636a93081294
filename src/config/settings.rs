//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`.
//! Missing keys in `settings.toml` take their default value, so a file only
//! needs the settings it changes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::caption::{Credential, GenerationOptions, Length};

// ---------------------------------------------------------------------------
// CompletionConfig
// ---------------------------------------------------------------------------

/// Settings for the completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// API key used when none is supplied on the command line or through
    /// `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    /// Seconds the front-end waits for a completion before giving up.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

/// Defaults for caption generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Always use canned templates.
    pub use_mock: bool,
    /// Use canned templates when no API key is available instead of failing.
    pub mock_when_unconfigured: bool,
    /// Length used when the request does not name one.
    pub default_length: Length,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            use_mock: false,
            mock_when_unconfigured: false,
            default_length: Length::Medium,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Load from the platform `settings.toml`; defaults when it is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save to the platform `settings.toml`, creating parent directories.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Pick the credential: an explicit value wins over the config file.
    pub fn resolve_credential(&self, explicit: Option<&str>) -> Option<Credential> {
        explicit
            .and_then(Credential::new)
            .or_else(|| self.completion.api_key.as_deref().and_then(Credential::new))
    }

    /// Generation switches, with `force_mock` layered over the config value.
    pub fn generation_options(&self, force_mock: bool) -> GenerationOptions {
        GenerationOptions {
            use_mock: force_mock || self.generation.use_mock,
            mock_when_unconfigured: self.generation.mock_when_unconfigured,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
