//! CLI configuration, parsed from a TOML file plus environment variable overrides.
//!
//! Priority: environment variables > config file > defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "seedphrase.toml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralSection,

    /// Defaults for `seedphrase generate`
    #[serde(default)]
    pub generate: GenerateSection,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Log level (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Mnemonic generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSection {
    /// Entropy size: 128, 160, 192, 224 or 256 bits
    #[serde(default = "default_entropy_bits")]
    pub entropy_bits: usize,

    /// Also print the generated entropy as hex
    #[serde(default)]
    pub show_entropy: bool,
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            entropy_bits: default_entropy_bits(),
            show_entropy: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_entropy_bits() -> usize {
    256 // 24 words
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load from `path` if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `SEEDPHRASE_LOG_LEVEL`
    /// - `SEEDPHRASE_ENTROPY_BITS`
    /// - `SEEDPHRASE_SHOW_ENTROPY` (`1`/`true` or `0`/`false`)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SEEDPHRASE_LOG_LEVEL") {
            self.general.log_level = v;
        }
        if let Ok(v) = std::env::var("SEEDPHRASE_ENTROPY_BITS") {
            if let Ok(bits) = v.parse::<usize>() {
                self.generate.entropy_bits = bits;
            }
        }
        if let Ok(v) = std::env::var("SEEDPHRASE_SHOW_ENTROPY") {
            match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.generate.show_entropy = true,
                "0" | "false" | "no" => self.generate.show_entropy = false,
                _ => {}
            }
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            LOG_LEVELS.contains(&self.general.log_level.to_ascii_lowercase().as_str()),
            "general.log_level must be one of: {}",
            LOG_LEVELS.join(", ")
        );

        seedphrase_core::check_entropy_size(self.generate.entropy_bits)
            .context("generate.entropy_bits must be 128, 160, 192, 224 or 256")?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
