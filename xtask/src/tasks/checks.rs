//! Steps of the `test` target: tests, linter, formatter, backup cleanup.
use std::path::Path;

use anyhow::{Context as _, Result};

use super::{Context, Task, TaskResult, helpers::run_tool, task_deps};

/// `cargo test`.
#[derive(Debug)]
pub struct RunTests;

impl Task for RunTests {
    fn name(&self) -> &'static str {
        "Run tests"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        run_tool(ctx, "cargo", &["test"])
    }
}

/// `cargo clippy`, after the tests.
#[derive(Debug)]
pub struct RunClippy;

impl Task for RunClippy {
    fn name(&self) -> &'static str {
        "Run clippy"
    }

    task_deps![RunTests];

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        run_tool(ctx, "cargo", &["clippy"])
    }
}

/// `cargo fmt`, rewriting sources in place, after the linter.
#[derive(Debug)]
pub struct FormatSources;

impl Task for FormatSources {
    fn name(&self) -> &'static str {
        "Format sources"
    }

    task_deps![RunClippy];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.test.format
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        run_tool(ctx, "cargo", &["fmt"])
    }
}

/// Delete the backup files the formatter leaves next to rewritten sources.
#[derive(Debug)]
pub struct RemoveBackupFiles;

impl Task for RemoveBackupFiles {
    fn name(&self) -> &'static str {
        "Remove formatter backups"
    }

    task_deps![FormatSources];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.test.format
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let pattern = ctx.path(Path::new(&ctx.config.test.backup_glob));
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern)
            .with_context(|| format!("invalid backup glob: {}", ctx.config.test.backup_glob))?;

        let mut backups = Vec::new();
        for entry in entries {
            let path = entry.context("failed to read backup candidate")?;
            if path.is_file() {
                backups.push(path);
            }
        }

        if ctx.dry_run {
            for path in &backups {
                ctx.log.dry_run(&format!("rm {}", path.display()));
            }
            return Ok(TaskResult::DryRun);
        }
        if backups.is_empty() {
            ctx.log.info("no backup files");
            return Ok(TaskResult::Ok);
        }
        for path in &backups {
            std::fs::remove_file(path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            ctx.log.debug(&format!("removed {}", path.display()));
        }
        ctx.log.info(&format!("removed {} backup file(s)", backups.len()));
        Ok(TaskResult::Ok)
    }
}
