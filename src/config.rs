//! Console configuration.
//!
//! Loaded from YAML (all keys optional) and then adjusted by environment
//! overrides:
//! - `TTS_CONSOLE_BASE_URL`
//! - `TTS_CONSOLE_TIMEOUT_SECS`

use crate::synthesis::{default_voices, AudioFormat, Voice, DEFAULT_ENDPOINT_PATH, DEFAULT_VOICE};
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_DOWNLOAD_STEM: &str = "tts_audio";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Origin of the synthesis endpoint. Unused by the browser binding,
    /// which posts to `endpoint_path` on the page origin.
    pub base_url: String,
    pub endpoint_path: String,
    /// No timeout unless set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub default_voice: String,
    pub default_format: AudioFormat,
    pub voices: Vec<Voice>,
    /// Download filename without extension.
    pub download_stem: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            timeout_secs: None,
            default_voice: DEFAULT_VOICE.to_string(),
            default_format: AudioFormat::default(),
            voices: default_voices(),
            download_stem: DEFAULT_DOWNLOAD_STEM.to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ConsoleConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Apply `TTS_CONSOLE_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_url) = env::var("TTS_CONSOLE_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(raw) = env::var("TTS_CONSOLE_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    "timeout must be a whole number of seconds",
                    ErrorContext::new()
                        .with_field_path("TTS_CONSOLE_TIMEOUT_SECS")
                        .with_details(raw.clone()),
                )
            })?;
            self.timeout_secs = Some(secs);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint_path.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "endpoint path must not be empty",
                ErrorContext::new().with_field_path("endpoint_path"),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new().with_field_path("timeout_secs"),
            ));
        }
        if self.download_stem.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "download stem must not be empty",
                ErrorContext::new().with_field_path("download_stem"),
            ));
        }
        if !self.voices.iter().any(|v| v.id == self.default_voice) {
            return Err(Error::configuration_with_context(
                "default voice is not in the voice catalog",
                ErrorContext::new()
                    .with_field_path("default_voice")
                    .with_details(self.default_voice.clone()),
            ));
        }
        Ok(())
    }

    pub fn voice(&self, id: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.id == id)
    }
}
