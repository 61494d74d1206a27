mod node;

use anyhow::Result;
use std::path::Path;

use crate::execution::Invocation;

pub use node::NodePackageManager;

pub trait PackageManager {
    /// Name of the executable on PATH.
    fn program(&self) -> &'static str;
    fn init_command(&self, dir: &Path) -> Invocation;
    fn install_command(&self, dir: &Path, packages: &[&str]) -> Invocation;
    fn install_dev_command(&self, dir: &Path, packages: &[&str]) -> Invocation;

    fn ensure_available(&self) -> Result<()> {
        which::which(self.program()).map_err(|_| {
            anyhow::anyhow!("Could not find `{}` on PATH", self.program())
        })?;
        Ok(())
    }
}
