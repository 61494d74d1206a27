use anyhow::Result;

use crate::cli::Cli;
use crate::config::Settings;
use crate::emitters::{render_all, write_all, ConfigFile};
use crate::execution::{CommandRunner, SystemRunner};
use crate::package_managers::PackageManager;
use crate::types::ScaffoldConfig;
use crate::workspace::{create_directories, directories_to_create, install_dependencies, install_plan};

impl Cli {
    pub fn execute(self) -> Result<()> {
        let settings = Settings::new()?;
        let config = self.scaffold_config(&settings);
        let package_manager = self.package_manager(&settings);
        log::debug!("Scaffolding with {:?} using {}", config, package_manager);

        // Render up front so nothing touches disk if a template fails
        let files = render_all(&config)?;

        if self.dry_run {
            return self.handle_dry_run(&config, &package_manager, &files);
        }

        self.scaffold(&config, &package_manager, &SystemRunner, &files)
    }

    fn scaffold(
        &self,
        config: &ScaffoldConfig,
        package_manager: &dyn PackageManager,
        runner: &dyn CommandRunner,
        files: &[ConfigFile],
    ) -> Result<()> {
        if !self.skip_install {
            package_manager.ensure_available()?;
        }

        create_directories(config)?;

        if self.skip_install {
            log::info!("Skipping dependency installation");
        } else {
            install_dependencies(package_manager, runner, config)?;
        }

        let written = write_all(config.root(), files)?;
        log::info!(
            "Scaffolded project in {} ({} config file(s))",
            config.root().display(),
            written.len()
        );
        Ok(())
    }

    fn handle_dry_run(
        &self,
        config: &ScaffoldConfig,
        package_manager: &dyn PackageManager,
        files: &[ConfigFile],
    ) -> Result<()> {
        println!("Directories:");
        for dir in directories_to_create(config) {
            println!("  {}", dir.display());
        }

        if !self.skip_install {
            println!("Commands:");
            for invocation in install_plan(package_manager, config) {
                println!("  {}", invocation);
            }
        }

        println!("Files:");
        for file in files {
            println!("  {}", config.root().join(file.path).display());
        }
        Ok(())
    }
}
