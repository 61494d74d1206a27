use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::dependencies::{dev_dependencies, runtime_dependencies};
use crate::execution::{run_all, CommandRunner, Invocation};
use crate::package_managers::PackageManager;
use crate::types::ScaffoldConfig;

/// Directories created for a new project, parents first. Empty when the
/// target is the current directory.
pub fn directories_to_create(config: &ScaffoldConfig) -> Vec<PathBuf> {
    if config.targets_current_dir() {
        return Vec::new();
    }
    let root = config.root();
    vec![root.to_path_buf(), root.join("src")]
}

pub fn create_directories(config: &ScaffoldConfig) -> Result<()> {
    for dir in directories_to_create(config) {
        log::info!("Creating {}", dir.display());
        // create_dir rather than create_dir_all: an existing target is an error
        fs::create_dir(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}

/// The manifest-init, runtime-install and dev-install commands, in the
/// order they run.
pub fn install_plan(package_manager: &dyn PackageManager, config: &ScaffoldConfig) -> Vec<Invocation> {
    let root = config.root();
    vec![
        package_manager.init_command(root),
        package_manager.install_command(root, &runtime_dependencies()),
        package_manager.install_dev_command(root, &dev_dependencies(config)),
    ]
}

/// Callers check `PackageManager::ensure_available` before creating any
/// directories.
pub fn install_dependencies(
    package_manager: &dyn PackageManager,
    runner: &dyn CommandRunner,
    config: &ScaffoldConfig,
) -> Result<()> {
    run_all(runner, &install_plan(package_manager, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::{CommandFailed, MockCommandRunner};
    use crate::package_managers::NodePackageManager;
    use crate::tests::config_fixtures::scaffold_config;
    use tempfile::TempDir;

    #[test]
    fn test_creates_target_and_src() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScaffoldConfig::new(temp_dir.path().join("myapp"));

        create_directories(&config).unwrap();

        assert!(temp_dir.path().join("myapp").is_dir());
        assert!(temp_dir.path().join("myapp/src").is_dir());
    }

    #[test]
    fn test_existing_target_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("myapp")).unwrap();
        let config = ScaffoldConfig::new(temp_dir.path().join("myapp"));

        let err = create_directories(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
        assert!(!temp_dir.path().join("myapp/src").exists());
    }

    #[test]
    fn test_current_dir_creates_nothing() {
        let config = ScaffoldConfig::new(".");
        assert!(directories_to_create(&config).is_empty());
        create_directories(&config).unwrap();
    }

    #[test]
    fn test_install_plan() {
        let config = scaffold_config(true, false, false);
        let plan = install_plan(&NodePackageManager::Npm, &config);

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].to_string(), "npm init -y");
        assert_eq!(plan[1].to_string(), "npm install --save react react-dom");
        assert!(plan[2].to_string().starts_with("npm install -D @babel/core"));
        assert!(plan[2].args.contains(&"typescript".to_string()));
        assert!(!plan[2].args.contains(&"sass-loader".to_string()));
        assert!(plan.iter().all(|i| i.current_dir == config.root()));
    }

    #[test]
    fn test_failed_install_aborts_with_status() {
        let config = scaffold_config(false, false, true);
        let plan = install_plan(&NodePackageManager::Npm, &config);

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|invocation| invocation.args[0] == "init")
            .times(1)
            .returning(|_| Ok(0));
        runner
            .expect_run()
            .withf(|invocation| invocation.args[0] == "install")
            .times(1)
            .returning(|_| Ok(254));

        let err = run_all(&runner, &plan).unwrap_err();
        assert_eq!(err.downcast_ref::<CommandFailed>().unwrap().code, 254);
    }
}
