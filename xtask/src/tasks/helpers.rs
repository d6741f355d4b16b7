use anyhow::Result;

use super::{Context, TaskResult};
use crate::exec::display_command;

/// Run a toolchain command in the workspace root with the console attached.
///
/// In dry-run mode the command is only logged.
pub(super) fn run_tool(ctx: &Context, program: &str, args: &[&str]) -> Result<TaskResult> {
    let rendered = display_command(program, args);
    if ctx.dry_run {
        ctx.log.dry_run(&rendered);
        return Ok(TaskResult::DryRun);
    }
    ctx.log.debug(&format!("running: {rendered}"));
    ctx.executor.stream_in(&ctx.root, program, args)?;
    Ok(TaskResult::Ok)
}
