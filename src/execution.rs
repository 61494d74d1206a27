use anyhow::{Context, Result};
use std::{
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

/// A fully specified external command: program, arguments and the directory
/// it runs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: &str, current_dir: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.current_dir(&self.current_dir);
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Raised when an external command exits unsuccessfully. The process exits
/// with the same status.
#[derive(Debug)]
pub struct CommandFailed {
    pub command: String,
    pub code: i32,
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` exited with status {}", self.command, self.code)
    }
}

impl std::error::Error for CommandFailed {}

#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs the invocation to completion and returns its exit code.
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        let status = invocation
            .to_command()
            .status()
            .with_context(|| format!("Failed to run `{}`", invocation))?;

        // Killed by a signal
        Ok(status.code().unwrap_or(1))
    }
}

/// Runs each invocation in turn, stopping at the first one that fails.
pub fn run_all(runner: &dyn CommandRunner, invocations: &[Invocation]) -> Result<()> {
    for invocation in invocations {
        log::info!("Running {}", invocation);
        let code = runner.run(invocation)?;
        if code != 0 {
            return Err(CommandFailed {
                command: invocation.to_string(),
                code,
            }
            .into());
        }
        log::debug!("`{}` finished", invocation);
    }
    Ok(())
}
