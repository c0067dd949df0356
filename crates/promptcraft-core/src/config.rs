use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Result, anyhow};

use crate::content::{ContentType, Tone};
use crate::generator::DEFAULT_GENERATION_LATENCY;
use crate::notify::DEFAULT_NOTICE_TTL;
use crate::reveal::DEFAULT_SCROLL_DELAY;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub default_content_type: Option<String>,
    pub default_tone: Option<String>,
    pub generation_latency_ms: Option<u64>,
    pub scroll_delay_ms: Option<u64>,
    pub notice_ttl_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field filled with the built-in value, for writing a starter file.
    pub fn with_defaults() -> Self {
        Self {
            default_content_type: Some(ContentType::default().as_str().to_string()),
            default_tone: Some(Tone::default().as_str().to_string()),
            generation_latency_ms: Some(DEFAULT_GENERATION_LATENCY.as_millis() as u64),
            scroll_delay_ms: Some(DEFAULT_SCROLL_DELAY.as_millis() as u64),
            notice_ttl_ms: Some(DEFAULT_NOTICE_TTL.as_millis() as u64),
            log_level: Some("info".to_string()),
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("promptcraft").join("config.json"))
    }

    pub fn content_type(&self) -> ContentType {
        match self.default_content_type.as_deref() {
            None => ContentType::default(),
            Some(value) => ContentType::from_str(value).unwrap_or_else(|| {
                tracing::warn!(value, "unknown default_content_type in config, using default");
                ContentType::default()
            }),
        }
    }

    pub fn tone(&self) -> Tone {
        match self.default_tone.as_deref() {
            None => Tone::default(),
            Some(value) => Tone::from_str(value).unwrap_or_else(|| {
                tracing::warn!(value, "unknown default_tone in config, using default");
                Tone::default()
            }),
        }
    }

    pub fn generation_latency(&self) -> Duration {
        self.generation_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_GENERATION_LATENCY)
    }

    pub fn scroll_delay(&self) -> Duration {
        self.scroll_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SCROLL_DELAY)
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_NOTICE_TTL)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
