use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionSaverError};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "versionsaver.toml";

/// File name looked up in the user's config directory.
pub const USER_CONFIG_FILE: &str = ".versionsaver.toml";

/// Represents the complete configuration for version-saver.
///
/// Every field has a default, so an empty file behaves like no file at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub suggestion: SuggestionConfig,
}

fn default_git_program() -> String {
    "git".to_string()
}

/// Settings for invoking the external git executable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Executable used for every pipeline step and the tag query
    #[serde(default = "default_git_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            program: default_git_program(),
        }
    }
}

fn default_version() -> String {
    "v1.0".to_string()
}

fn default_fallback_suffix() -> String {
    "_new".to_string()
}

/// Settings for the version label suggestion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SuggestionConfig {
    /// Label suggested when the repository has no tags yet
    #[serde(default = "default_version")]
    pub default_version: String,

    /// Appended to a tag that cannot be auto-incremented
    #[serde(default = "default_fallback_suffix")]
    pub fallback_suffix: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            default_version: default_version(),
            fallback_suffix: default_fallback_suffix(),
        }
    }
}

impl Config {
    fn validate(self) -> Result<Self> {
        if self.git.program.trim().is_empty() {
            return Err(VersionSaverError::config("git.program must not be empty"));
        }
        Ok(self)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionsaver.toml` in current directory
/// 3. `.versionsaver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            VersionSaverError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.git.program, "git");
        assert_eq!(config.suggestion.default_version, "v1.0");
        assert_eq!(config.suggestion.fallback_suffix, "_new");
    }

    #[test]
    fn test_empty_toml_equals_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[suggestion]
default_version = "v0.1"
"#,
        )
        .unwrap();
        assert_eq!(config.suggestion.default_version, "v0.1");
        assert_eq!(config.suggestion.fallback_suffix, "_new");
        assert_eq!(config.git.program, "git");
    }

    #[test]
    fn test_blank_program_rejected() {
        let config: Config = toml::from_str("[git]\nprogram = \"  \"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("git.program"));
    }
}
