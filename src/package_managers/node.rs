use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

use super::PackageManager;
use crate::execution::Invocation;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl FromStr for NodePackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(format!("Invalid package manager: {}", s)),
        }
    }
}

impl fmt::Display for NodePackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl PackageManager for NodePackageManager {
    fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    fn init_command(&self, dir: &Path) -> Invocation {
        let cmd = Invocation::new(self.program(), dir).arg("init");
        match self {
            // pnpm init takes no confirmation flag
            Self::Pnpm => cmd,
            _ => cmd.arg("-y"),
        }
    }

    fn install_command(&self, dir: &Path, packages: &[&str]) -> Invocation {
        let cmd = Invocation::new(self.program(), dir);
        let cmd = match self {
            Self::Npm => cmd.args(["install", "--save"]),
            Self::Yarn | Self::Pnpm | Self::Bun => cmd.arg("add"),
        };
        cmd.args(packages)
    }

    fn install_dev_command(&self, dir: &Path, packages: &[&str]) -> Invocation {
        let cmd = Invocation::new(self.program(), dir);
        let cmd = match self {
            Self::Npm => cmd.args(["install", "-D"]),
            Self::Yarn | Self::Pnpm => cmd.args(["add", "-D"]),
            Self::Bun => cmd.args(["add", "-d"]),
        };
        cmd.args(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_commands() {
        let npm = NodePackageManager::Npm;
        let dir = Path::new("myapp");

        assert_eq!(npm.init_command(dir).to_string(), "npm init -y");
        assert_eq!(
            npm.install_command(dir, &["react", "react-dom"]).to_string(),
            "npm install --save react react-dom"
        );
        assert_eq!(
            npm.install_dev_command(dir, &["webpack"]).to_string(),
            "npm install -D webpack"
        );
        assert_eq!(npm.init_command(dir).current_dir, Path::new("myapp"));
    }

    #[test]
    fn test_other_package_managers() {
        let dir = Path::new(".");

        assert_eq!(NodePackageManager::Yarn.init_command(dir).to_string(), "yarn init -y");
        assert_eq!(NodePackageManager::Pnpm.init_command(dir).to_string(), "pnpm init");
        assert_eq!(
            NodePackageManager::Pnpm.install_command(dir, &["react"]).to_string(),
            "pnpm add react"
        );
        assert_eq!(
            NodePackageManager::Yarn.install_dev_command(dir, &["webpack"]).to_string(),
            "yarn add -D webpack"
        );
        assert_eq!(
            NodePackageManager::Bun.install_dev_command(dir, &["webpack"]).to_string(),
            "bun add -d webpack"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("npm".parse::<NodePackageManager>(), Ok(NodePackageManager::Npm));
        assert_eq!("Yarn".parse::<NodePackageManager>(), Ok(NodePackageManager::Yarn));
        assert!("deno".parse::<NodePackageManager>().is_err());
    }
}
