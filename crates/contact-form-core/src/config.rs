// File: src/config.rs
// Purpose: Form configuration parsed from contact-form.toml or supplied by the host

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::field::ElementIds;
use crate::password::DEFAULT_MIN_LENGTH;

/// Placeholder replaced with the submitted name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub success: SuccessConfig,

    #[serde(default)]
    pub elements: ElementIds,
}

/// Field rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum password length in UTF-16 code units (default: 8)
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

/// Success message behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessConfig {
    /// How long the success message stays visible (default: 5000)
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,

    /// Message template; `{name}` is replaced with the name as entered
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_password_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_hide_delay_ms() -> u64 {
    5000
}

fn default_template() -> String {
    "Thank you, {name}! Your message has been sent.".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
        }
    }
}

impl Default for SuccessConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            template: default_template(),
        }
    }
}

impl SuccessConfig {
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Render the success message for `name`
    pub fn render(&self, name: &str) -> String {
        self.template.replace(NAME_PLACEHOLDER, name)
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the form cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.validation.password_min_length == 0 {
            bail!("validation.password_min_length must be at least 1");
        }
        if self.success.hide_delay_ms == 0 {
            bail!("success.hide_delay_ms must be greater than 0");
        }
        Ok(())
    }
}
