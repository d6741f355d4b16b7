use anyhow::{Result, bail};

use super::{Context, Task, TaskResult, helpers::run_tool};

/// Add the configured toolchain components with `rustup`, one command each.
#[derive(Debug)]
pub struct InstallComponents;

impl Task for InstallComponents {
    fn name(&self) -> &'static str {
        "Install toolchain components"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let components = &ctx.config.install.components;
        if components.is_empty() {
            return Ok(TaskResult::Skipped("no components configured".to_string()));
        }
        if !ctx.dry_run && !ctx.executor.which("rustup") {
            bail!("rustup not found on PATH");
        }

        let mut result = TaskResult::Ok;
        for component in components {
            result = run_tool(ctx, "rustup", &["component", "add", component.as_str()])?;
        }
        Ok(result)
    }
}
