use crate::config::Settings;
use crate::package_managers::NodePackageManager;
use crate::types::ScaffoldConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "react-scaffold")]
#[command(author = "Oliver Steele <steele@osteele.com>")]
#[command(version)]
#[command(about = "Scaffold a React project with webpack, TypeScript, Sass and ESLint configuration", long_about = None)]
pub struct Cli {
    /// The directory where your files will be created ('.' for the current directory)
    pub dir: PathBuf,

    /// The port the dev server will listen on [default: 4000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Add support for TypeScript
    #[arg(short = 't', long = "ts")]
    pub ts: bool,

    /// Add support for Sass
    #[arg(short, long)]
    pub sass: bool,

    /// Add ESLint support
    #[arg(short = 'l', long)]
    pub eslint: bool,

    /// Also write a .babelrc
    #[arg(short, long)]
    pub babelrc: bool,

    /// Package manager used to install dependencies (npm, yarn, pnpm or bun)
    #[arg(long)]
    pub package_manager: Option<NodePackageManager>,

    /// Create directories and config files without installing dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Print what would be done without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn scaffold_config(&self, settings: &Settings) -> ScaffoldConfig {
        ScaffoldConfig {
            port: settings.get_effective_port(self.port),
            enable_typescript: self.ts,
            enable_sass: self.sass,
            enable_linting: self.eslint,
            enable_babelrc: self.babelrc,
            ..ScaffoldConfig::new(self.dir.clone())
        }
    }

    pub fn package_manager(&self, settings: &Settings) -> NodePackageManager {
        settings.get_effective_package_manager(self.package_manager)
    }
}
