//! Step summary types and the [`Log`] trait.

/// One line of the end-of-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Step name.
    pub name: String,
    /// Final status of the step.
    pub status: TaskStatus,
    /// Optional detail (skip reason or error description).
    pub message: Option<String>,
}

/// Status of a finished step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Step completed successfully.
    Ok,
    /// Step is switched off by configuration.
    NotApplicable,
    /// Step did not run (an earlier step failed, or nothing to do).
    Skipped,
    /// Step was only described, not executed.
    DryRun,
    /// Step failed; the target is aborted.
    Failed,
}

impl TaskStatus {
    /// Summary icon and ANSI colour for this status.
    #[must_use]
    pub const fn icon(self) -> (&'static str, &'static str) {
        match self {
            Self::Ok => ("✓", "\x1b[32m"),
            Self::NotApplicable => ("·", "\x1b[2m"),
            Self::Skipped => ("○", "\x1b[33m"),
            Self::DryRun => ("~", "\x1b[37m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }
}

/// Logging backend used by steps.
///
/// Steps receive an `Arc<dyn Log>` through their context so tests can
/// substitute a recorder for the console logger.
pub trait Log: Send + Sync {
    /// Log a stage header (one per step).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (console only when verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Describe an action that dry-run mode did not perform.
    fn dry_run(&self, msg: &str);
    /// Record a step result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
