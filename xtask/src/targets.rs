//! Named targets (`install-deps`, `test`, `docs`, `doc`) and their steps.
use std::fmt::Write as _;

use crate::error::XtaskError;
use crate::tasks::{Task, checks, components, docs, graph};

/// A target the runner can be asked to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Add the toolchain components the other targets need.
    InstallDeps,
    /// Tests, linter, formatter and backup cleanup.
    Test,
    /// Generate documentation and publish it.
    Docs,
    /// Alias that only depends on [`Target::Docs`].
    Doc,
}

impl Target {
    /// Every target, in listing order.
    pub const ALL: [Self; 4] = [Self::InstallDeps, Self::Test, Self::Doc, Self::Docs];

    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InstallDeps => "install-deps",
            Self::Test => "test",
            Self::Docs => "docs",
            Self::Doc => "doc",
        }
    }

    /// Targets that must be built first.
    #[must_use]
    pub const fn prerequisites(self) -> &'static [Self] {
        match self {
            Self::Doc => &[Self::Docs],
            Self::InstallDeps | Self::Test | Self::Docs => &[],
        }
    }

    /// `xtask.toml` section whose settings this target reads.
    #[must_use]
    pub const fn config_section(self) -> Option<&'static str> {
        match self {
            Self::InstallDeps => Some("install"),
            Self::Test => Some("test"),
            Self::Docs => Some("docs"),
            Self::Doc => None,
        }
    }

    /// The target's own steps, excluding prerequisites.
    #[must_use]
    pub fn steps(self) -> Vec<Box<dyn Task>> {
        match self {
            Self::InstallDeps => vec![Box::new(components::InstallComponents)],
            Self::Test => vec![
                Box::new(checks::RunTests),
                Box::new(checks::RunClippy),
                Box::new(checks::FormatSources),
                Box::new(checks::RemoveBackupFiles),
            ],
            Self::Docs => vec![
                Box::new(docs::GenerateDocs),
                Box::new(docs::OverlayIndexPage),
                Box::new(docs::PublishDocs),
            ],
            Self::Doc => Vec::new(),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand `target` into the targets to build: prerequisites first,
/// depth-first, each target once.
#[must_use]
pub fn resolve(target: Target) -> Vec<Target> {
    fn visit(target: Target, out: &mut Vec<Target>, visiting: &mut Vec<Target>) {
        if out.contains(&target) || visiting.contains(&target) {
            return;
        }
        visiting.push(target);
        for &prereq in target.prerequisites() {
            visit(prereq, out, visiting);
        }
        visiting.pop();
        out.push(target);
    }

    let mut out = Vec::new();
    visit(target, &mut out, &mut Vec::new());
    out
}

/// The ordered steps that building `target` runs.
///
/// # Errors
///
/// Returns [`XtaskError::Task`] if the steps' dependencies form a cycle.
pub fn plan(target: Target) -> Result<Vec<Box<dyn Task>>, XtaskError> {
    let mut steps: Vec<Option<Box<dyn Task>>> = resolve(target)
        .into_iter()
        .flat_map(Target::steps)
        .map(Some)
        .collect();
    let refs: Vec<&dyn Task> = steps.iter().flatten().map(Box::as_ref).collect();
    let order = graph::order(&refs)?;
    Ok(order
        .into_iter()
        .filter_map(|i| steps.get_mut(i).and_then(Option::take))
        .collect())
}

/// Human-readable listing of every target, its prerequisites and steps.
#[must_use]
pub fn describe() -> String {
    let mut out = String::new();
    for target in Target::ALL {
        let _ = write!(out, "{target}");
        let prereqs: Vec<&str> = target.prerequisites().iter().map(|t| t.name()).collect();
        if !prereqs.is_empty() {
            let _ = write!(out, ": {}", prereqs.join(" "));
        }
        out.push('\n');
        for step in target.steps() {
            let _ = writeln!(out, "    {}", step.name());
        }
    }
    out
}
