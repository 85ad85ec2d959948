use crate::error::{AdjustmentError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "crop-adjustments";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub content_packs: ContentPackConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentPackConfig {
    /// Directories scanned for content packs, in load order.
    pub directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AdjustmentError::Config(format!(
                "Config file not found at {:?}. Run `cropadjust init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdjustmentError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parse a YAML config, substituting `${VAR}` references first.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| AdjustmentError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR).join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/crop-adjustments/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdjustmentError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Default content pack directory (~/.local/share/crop-adjustments/packs).
    pub fn default_packs_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AdjustmentError::Config("Cannot determine data directory".into()))?;
        Ok(data_dir.join(APP_DIR).join("packs"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up crop adjustments!");
        println!();

        let default_packs = Self::default_packs_dir()?;
        let packs_dir: String = Input::new()
            .with_prompt("  Content pack directory")
            .default(default_packs.display().to_string())
            .interact_text()
            .map_err(|e| AdjustmentError::Config(format!("Input error: {}", e)))?;

        let level: String = Input::new()
            .with_prompt("  Log level (error, warn, info, debug, trace)")
            .default(default_log_level())
            .interact_text()
            .map_err(|e| AdjustmentError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            content_packs: ContentPackConfig {
                directories: vec![PathBuf::from(packs_dir)],
            },
            logging: LoggingConfig { level },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AdjustmentError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# Crop Adjustments Configuration\n# Generated by `cropadjust init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AdjustmentError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_packs: ContentPackConfig {
                directories: vec![PathBuf::from("packs")],
            },
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_yaml_reads_directories() {
        let config = Config::from_yaml(
            "content_packs:\n  directories:\n    - packs/base\n    - packs/extra\nlogging:\n  level: debug\n",
        )
        .unwrap();

        assert_eq!(
            config.content_packs.directories,
            vec![PathBuf::from("packs/base"), PathBuf::from("packs/extra")]
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn logging_defaults_to_warn() {
        let config = Config::from_yaml("content_packs:\n  directories: []\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.content_packs.directories.is_empty());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("CROP_ADJUSTMENTS_TEST_PACKS", "/srv/packs");
        let config = Config::from_yaml(
            "content_packs:\n  directories:\n    - ${CROP_ADJUSTMENTS_TEST_PACKS}\n",
        )
        .unwrap();
        assert_eq!(
            config.content_packs.directories,
            vec![PathBuf::from("/srv/packs")]
        );
    }

    #[test]
    fn unknown_env_vars_are_left_alone() {
        let result = Config::substitute_env_vars("dir: ${CROP_ADJUSTMENTS_UNSET_VAR}").unwrap();
        assert_eq!(result, "dir: ${CROP_ADJUSTMENTS_UNSET_VAR}");
    }

    #[test]
    fn missing_section_is_an_error() {
        let err = Config::from_yaml("logging:\n  level: info\n").unwrap_err();
        assert!(matches!(err, AdjustmentError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/cropadjust.yaml"))).unwrap_err();
        assert!(err.to_string().contains("cropadjust init"));
    }
}
