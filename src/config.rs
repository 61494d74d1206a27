use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::package_managers::NodePackageManager;
use crate::types::DEFAULT_PORT;

pub const CONFIG_FILE_NAME: &str = ".react-scaffold.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub package_manager: NodePackageManager,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_path(Self::get_config_path())
    }

    pub fn from_path(config_path: PathBuf) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default values
            .set_default("package_manager", "npm")?
            // Add config file if it exists
            .add_source(File::from(config_path).required(false))
            .build()?;

        s.try_deserialize()
    }

    fn get_config_path() -> PathBuf {
        // First check current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let local_config = current_dir.join(CONFIG_FILE_NAME);

        if local_config.exists() {
            return local_config;
        }

        // Fall back to home directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    pub fn get_effective_port(&self, cli_port: Option<u16>) -> u16 {
        cli_port.unwrap_or(self.port)
    }

    pub fn get_effective_package_manager(
        &self,
        cli_package_manager: Option<NodePackageManager>,
    ) -> NodePackageManager {
        cli_package_manager.unwrap_or(self.package_manager)
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::from_path(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(settings.port, 4000);
        assert_eq!(settings.package_manager, NodePackageManager::Npm);
    }

    #[test]
    fn test_values_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "port = 3000\npackage_manager = \"pnpm\"\n").unwrap();

        let settings = Settings::from_path(path).unwrap();

        assert_eq!(settings.port, 3000);
        assert_eq!(settings.package_manager, NodePackageManager::Pnpm);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let settings = Settings {
            port: 3000,
            package_manager: NodePackageManager::Yarn,
        };

        assert_eq!(settings.get_effective_port(Some(8080)), 8080);
        assert_eq!(settings.get_effective_port(None), 3000);
        assert_eq!(
            settings.get_effective_package_manager(Some(NodePackageManager::Bun)),
            NodePackageManager::Bun
        );
        assert_eq!(settings.get_effective_package_manager(None), NodePackageManager::Yarn);
    }

    #[test]
    fn test_invalid_package_manager() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "package_manager = \"deno\"\n").unwrap();

        assert!(Settings::from_path(path).is_err());
    }
}
