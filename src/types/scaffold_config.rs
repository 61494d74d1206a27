use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 4000;

/// Everything a scaffold run needs to know, collected once from the command
/// line and settings and then only ever read.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaffoldConfig {
    pub target_directory: PathBuf,
    pub port: u16,
    pub enable_typescript: bool,
    pub enable_sass: bool,
    pub enable_linting: bool,
    pub enable_babelrc: bool,
}

impl ScaffoldConfig {
    pub fn new(target_directory: impl Into<PathBuf>) -> Self {
        Self {
            target_directory: target_directory.into(),
            port: DEFAULT_PORT,
            enable_typescript: false,
            enable_sass: false,
            enable_linting: false,
            enable_babelrc: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.target_directory
    }

    /// True when the target is the directory the tool was invoked from, in
    /// which case no directories are created.
    pub fn targets_current_dir(&self) -> bool {
        self.target_directory == Path::new(".")
    }

    pub fn entry_extension(&self) -> &'static str {
        if self.enable_typescript {
            "tsx"
        } else {
            "jsx"
        }
    }
}
