//! Compile configuration loaded from TOML.
//!
//! - `parse_config_toml(toml_content)` parses and validates a config
//! - Default values are embedded via `include_str!("default_config.toml")`

use serde::Deserialize;

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

/// Returns the embedded default config TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    /// Suffix lengths, in characters, strictly ascending.
    pub suffix_lens: Vec<usize>,
    /// Tag tokens dropped from every entry before interning.
    #[serde(default)]
    pub ignore_tags: Vec<String>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            suffix_lens: vec![3, 4, 5],
            ignore_tags: Vec::new(),
        }
    }
}

pub fn parse_config_toml(toml_str: &str) -> Result<CompileConfig, ConfigError> {
    let config: CompileConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &CompileConfig) -> Result<(), ConfigError> {
    if config.suffix_lens.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "suffix_lens".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    // Strictly ascending implies nonzero and duplicate-free; the compiler
    // claims by the shortest length first and the lookup engine relies on
    // the same order reversed for the approximate tier.
    for pair in config.suffix_lens.windows(2) {
        if pair[0] >= pair[1] {
            return Err(ConfigError::InvalidValue {
                field: "suffix_lens".to_string(),
                reason: format!("must be strictly ascending, got {} before {}", pair[0], pair[1]),
            });
        }
    }
    if config.suffix_lens[0] == 0 {
        return Err(ConfigError::InvalidValue {
            field: "suffix_lens".to_string(),
            reason: "lengths must be nonzero".to_string(),
        });
    }
    for tag in &config.ignore_tags {
        if tag.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ignore_tags".to_string(),
                reason: "empty tag token".to_string(),
            });
        }
    }
    Ok(())
}
