//! Top-level command orchestration: resolve the workspace, load settings,
//! run a target's steps.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::{CONFIG_FILE, Config};
use crate::error::TaskError;
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger, TaskStatus};
use crate::targets::{self, Target};
use crate::tasks::{self, Context};

/// Workspace root and settings shared by every target command.
#[derive(Debug)]
pub struct CommandSetup {
    /// Workspace root.
    pub root: PathBuf,
    /// Settings loaded from `xtask.toml` or `--config`.
    pub config: Config,
}

impl CommandSetup {
    /// Resolve the workspace root, load `xtask.toml` and report the
    /// warnings relevant to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined or the config
    /// file cannot be read or parsed.
    pub fn init(global: &GlobalOpts, target: Target, log: &dyn Log) -> Result<Self> {
        let root = resolve_root(global)?;
        log.debug(&format!("workspace root: {}", root.display()));

        let config_path = global
            .config
            .clone()
            .unwrap_or_else(|| root.join(CONFIG_FILE));
        let config = Config::load(&config_path)?;
        log.debug(&format!("config: {}", config_path.display()));

        let sections: Vec<&str> = targets::resolve(target)
            .into_iter()
            .filter_map(Target::config_section)
            .collect();
        for warning in config.validate(&root) {
            let section = warning.key.split('.').next().unwrap_or_default();
            if sections.contains(&section) {
                log.warn(&format!("{}: {}", warning.key, warning.message));
            }
        }

        Ok(Self { root, config })
    }
}

/// Run `target` against the real toolchain.
///
/// # Errors
///
/// Returns an error if setup fails or any step fails.
pub fn run(target: Target, global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let version = option_env!("XTASK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("xtask {version}"));

    let setup = CommandSetup::init(global, target, log.as_ref())?;
    let ctx = Context::new(
        setup.root,
        setup.config,
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemExecutor) as Arc<dyn Executor>,
        global.dry_run,
    );
    let result = run_target(target, &ctx);
    log.print_summary();
    result
}

/// Execute the steps of `target` (prerequisites included) in order,
/// stopping at the first failure.
///
/// Steps after a failed one are recorded as skipped.
///
/// # Errors
///
/// Returns [`TaskError::DependencyCycle`] if the steps cannot be ordered
/// and [`TaskError::ExecutionFailed`] for the first failed step.
pub fn run_target(target: Target, ctx: &Context) -> Result<()> {
    let steps = targets::plan(target)?;
    ctx.log.debug(&format!(
        "{target}: {}",
        steps.iter().map(|s| s.name()).collect::<Vec<_>>().join(" -> ")
    ));

    let mut failure: Option<TaskError> = None;
    for step in &steps {
        if let Some(TaskError::ExecutionFailed { task, .. }) = &failure {
            ctx.log.record_task(
                step.name(),
                TaskStatus::Skipped,
                Some(&format!("aborted: {task} failed")),
            );
            continue;
        }
        if let Err(e) = tasks::execute(step.as_ref(), ctx) {
            failure = Some(TaskError::ExecutionFailed {
                task: step.name().to_string(),
                reason: format!("{e:#}"),
            });
        }
    }

    failure.map_or(Ok(()), |err| Err(err.into()))
}

/// Print every target with its prerequisites and steps.
pub fn list() {
    print!("{}", targets::describe());
}

/// Resolve the workspace root from CLI arguments or auto-detection.
///
/// Order: `--root`, `XTASK_ROOT`, the directory above the xtask crate,
/// the current directory. The last two only count when they hold a
/// `Cargo.toml`.
///
/// # Errors
///
/// Returns an error if no candidate qualifies.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(root) = &global.root {
        return Ok(root.clone());
    }
    if let Some(root) = std::env::var_os("XTASK_ROOT") {
        return Ok(PathBuf::from(root));
    }
    if let Some(parent) = Path::new(env!("CARGO_MANIFEST_DIR")).parent()
        && parent.join("Cargo.toml").is_file()
    {
        return Ok(parent.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    if cwd.join("Cargo.toml").is_file() {
        return Ok(cwd);
    }
    anyhow::bail!("cannot determine workspace root. Use --root or set XTASK_ROOT");
}
