use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::exec::Executor;
use crate::logging::Log;

/// Shared state handed to every step.
pub struct Context {
    /// Workspace root; relative config paths resolve against it and
    /// toolchain commands run in it.
    pub root: PathBuf,
    /// Settings from `xtask.toml`.
    pub config: Arc<Config>,
    /// Logger for output and step recording.
    pub log: Arc<dyn Log>,
    /// Command executor (real processes, or a recorder in tests).
    pub executor: Arc<dyn Executor>,
    /// Describe steps instead of running them.
    pub dry_run: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("log", &"<dyn Log>")
            .field("executor", &self.executor)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Context {
    /// Creates a new context for running a target.
    #[must_use]
    pub fn new(
        root: PathBuf,
        config: Config,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
        dry_run: bool,
    ) -> Self {
        Self {
            root,
            config: Arc::new(config),
            log,
            executor,
            dry_run,
        }
    }

    /// Resolve a config-relative path against the workspace root.
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
