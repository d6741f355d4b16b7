//! Individual steps of the workspace targets.
pub mod checks;
pub mod components;
mod context;
pub mod docs;
pub mod graph;
mod helpers;

/// Implement [`Task::dependencies`] from a list of step types.
///
/// The `const DEPS` intermediate gives the slice the `'static` lifetime the
/// return type needs; [`std::any::TypeId::of`] is a `const fn`.
///
/// ```ignore
/// task_deps![super::checks::RunTests]
/// ```
macro_rules! task_deps {
    [$($dep:ty),+ $(,)?] => {
        fn dependencies(&self) -> &[std::any::TypeId] {
            const DEPS: &[std::any::TypeId] = &[$(std::any::TypeId::of::<$dep>()),+];
            DEPS
        }
    };
}

pub(crate) use task_deps;

pub use context::Context;

use std::any::TypeId;

use anyhow::Result;

use crate::logging::TaskStatus;

/// What a step did when it ran without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Step completed successfully.
    Ok,
    /// Step had nothing to do.
    Skipped(String),
    /// Step only described its actions (`--dry-run`).
    DryRun,
}

/// One step of a target.
///
/// The `'static` bound gives every step type a stable [`TypeId`], which is
/// how steps name their dependencies.
pub trait Task: Send + Sync + 'static {
    /// Human-readable step name.
    fn name(&self) -> &str;

    /// The concrete `TypeId` of this step, used as a dependency identifier.
    fn task_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Steps that must finish before this one starts.
    ///
    /// Dependencies that are not part of the current plan are ignored.
    fn dependencies(&self) -> &[TypeId] {
        &[]
    }

    /// Whether configuration enables this step.
    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    /// Execute the step.
    ///
    /// # Errors
    ///
    /// Returns an error if a toolchain command exits non-zero or a
    /// filesystem operation fails. The target is aborted.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Execute a step and record its outcome in the context's logger.
///
/// # Errors
///
/// Passes through the step's error after logging and recording it.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<TaskStatus> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping step: {} (disabled)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(TaskStatus::NotApplicable);
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(TaskStatus::Ok)
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            Ok(TaskStatus::Skipped)
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
            Ok(TaskStatus::DryRun)
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}
