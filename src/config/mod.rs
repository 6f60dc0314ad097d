use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    Hour24,      // "14:30"
    Hour12,      // "2:30pm"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_domain: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub clock_format: ClockFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_domain: String::new(),
            auth_token: None,
            clock_format: ClockFormat::Hour24,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            serde_json::from_str(&contents)
                .context("Failed to parse config file")
        } else {
            log::info!("no config file yet, starting from defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        log::debug!("config saved to {}", config_path.display());

        Ok(())
    }

    /// A signed-in setup needs both a reachable domain and a JWT
    pub fn is_configured(&self) -> bool {
        !self.api_domain.is_empty() && self.auth_token.is_some()
    }

    fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "daybook", "daybook")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    pub fn base_url(&self) -> String {
        // Clean up the domain - remove protocol, trailing slashes, paths
        let domain = self.api_domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .split('/')
            .next()
            .unwrap_or(&self.api_domain);

        format!("https://{}", domain)
    }
}
