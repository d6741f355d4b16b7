use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

/// Render `program args...` for log lines and error messages.
#[must_use]
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs external programs on behalf of tasks.
///
/// Tasks only talk to the toolchain through this trait so tests can record
/// the issued commands instead of spawning them.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run a command in `dir` with the console attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or exits non-zero.
    fn stream_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()>;

    /// Check if a program is available on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// Production [`Executor`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn stream_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        let label = display_command(program, args);
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .with_context(|| format!("failed to execute: {label}"))?;
        if !status.success() {
            bail!("{label} failed (exit {})", status.code().unwrap_or(-1));
        }
        Ok(())
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
