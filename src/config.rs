use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for image-tag.
///
/// Contains the default image base name and git invocation settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Image base name used when none is given on the command line
    #[serde(default)]
    pub default_image: Option<String>,

    #[serde(default)]
    pub git: GitConfig,
}

/// Configuration for how the git tool is invoked.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Name or path of the git executable
    #[serde(default = "default_git_binary")]
    pub binary: String,
}

fn default_git_binary() -> String {
    "git".to_string()
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            binary: default_git_binary(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `imagetag.toml` in current directory
/// 3. `~/.config/.imagetag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./imagetag.toml").exists() {
        fs::read_to_string("./imagetag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".imagetag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_image, None);
        assert_eq!(config.git.binary, "git");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
default_image = "registry.io/team/myapp"

[git]
binary = "/usr/local/bin/git"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.default_image,
            Some("registry.io/team/myapp".to_string())
        );
        assert_eq!(config.git.binary, "/usr/local/bin/git");
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: Config = toml::from_str(r#"default_image = "myapp""#).unwrap();
        assert_eq!(config.default_image, Some("myapp".to_string()));
        assert_eq!(config.git.binary, "git");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
