//! Steps of the `docs` target: generate, overlay the index page, publish.
use anyhow::{Context as _, Result};

use super::{Context, Task, TaskResult, helpers::run_tool, task_deps};
use crate::error::TaskError;

/// `cargo doc -j<jobs> [-q]`.
#[derive(Debug)]
pub struct GenerateDocs;

impl Task for GenerateDocs {
    fn name(&self) -> &'static str {
        "Generate docs"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let jobs = format!("-j{}", ctx.config.docs.jobs);
        let mut args = vec!["doc", jobs.as_str()];
        if ctx.config.docs.quiet {
            args.push("-q");
        }
        run_tool(ctx, "cargo", &args)
    }
}

/// Copy the static index page into the generated output.
#[derive(Debug)]
pub struct OverlayIndexPage;

impl Task for OverlayIndexPage {
    fn name(&self) -> &'static str {
        "Overlay index page"
    }

    task_deps![GenerateDocs];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.docs.relocate
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let docs = &ctx.config.docs;
        let source = ctx.path(&docs.index_page);
        let generated = ctx.path(&docs.generated_dir);
        let file_name = source
            .file_name()
            .with_context(|| format!("index page has no file name: {}", source.display()))?;
        let dest = generated.join(file_name);

        if ctx.dry_run {
            ctx.log
                .dry_run(&format!("cp {} {}", source.display(), dest.display()));
            return Ok(TaskResult::DryRun);
        }

        if !source.is_file() {
            return Err(TaskError::MissingPath(source.display().to_string()).into());
        }
        if !generated.is_dir() {
            return Err(TaskError::MissingPath(generated.display().to_string()).into());
        }
        std::fs::copy(&source, &dest).with_context(|| {
            format!("failed to copy {} to {}", source.display(), dest.display())
        })?;
        ctx.log.debug(&format!("copied {}", dest.display()));
        Ok(TaskResult::Ok)
    }
}

/// Replace the published docs directory with the freshly generated output.
///
/// The old directory is removed first, so the result never mixes stale
/// pages with new ones.
#[derive(Debug)]
pub struct PublishDocs;

impl Task for PublishDocs {
    fn name(&self) -> &'static str {
        "Publish docs"
    }

    task_deps![OverlayIndexPage];

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.docs.relocate
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let generated = ctx.path(&ctx.config.docs.generated_dir);
        let output = ctx.path(&ctx.config.docs.output_dir);

        if ctx.dry_run {
            ctx.log.dry_run(&format!("rm -rf {}", output.display()));
            ctx.log.dry_run(&format!(
                "mv {} {}",
                generated.display(),
                output.display()
            ));
            return Ok(TaskResult::DryRun);
        }

        if !generated.is_dir() {
            return Err(TaskError::MissingPath(generated.display().to_string()).into());
        }
        if output.exists() {
            std::fs::remove_dir_all(&output)
                .with_context(|| format!("failed to remove {}", output.display()))?;
            ctx.log.debug(&format!("removed {}", output.display()));
        }
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::rename(&generated, &output).with_context(|| {
            format!(
                "failed to move {} to {}",
                generated.display(),
                output.display()
            )
        })?;
        ctx.log.info(&format!("published {}", output.display()));
        Ok(TaskResult::Ok)
    }
}
