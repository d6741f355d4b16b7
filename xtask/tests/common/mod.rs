// Shared helpers for integration tests.
//
// Provides a temporary workspace that looks like the serde-url checkout
// after `cargo doc` ran, plus a recording executor and an in-memory log so
// targets can run end to end without spawning cargo.
#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};

use xtask::config::{CONFIG_FILE, Config};
use xtask::exec::{Executor, display_command};
use xtask::logging::{Log, TaskEntry, TaskStatus};
use xtask::tasks::Context;

/// Executor that records commands and fails the ones starting with a prefix.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<String>>,
    fail_prefix: Option<String>,
}

impl Recorder {
    pub fn failing(prefix: &str) -> Self {
        Self {
            fail_prefix: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> Result<()> {
        let rendered = display_command(program, args);
        self.calls.lock().unwrap().push(rendered.clone());
        if self
            .fail_prefix
            .as_deref()
            .is_some_and(|p| rendered.starts_with(p))
        {
            bail!("{rendered} exited with status 101");
        }
        Ok(())
    }
}

impl Executor for Recorder {
    fn stream_in(&self, _dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        self.record(program, args)
    }

    fn which(&self, _program: &str) -> bool {
        true
    }
}

/// [`Log`] that keeps step results and dry-run lines in memory.
#[derive(Debug, Default)]
pub struct Journal {
    tasks: Mutex<Vec<TaskEntry>>,
    dry_runs: Mutex<Vec<String>>,
}

impl Journal {
    pub fn entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<(String, TaskStatus)> {
        self.entries()
            .into_iter()
            .map(|e| (e.name, e.status))
            .collect()
    }

    pub fn dry_runs(&self) -> Vec<String> {
        self.dry_runs.lock().unwrap().clone()
    }
}

impl Log for Journal {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn dry_run(&self, msg: &str) {
        self.dry_runs.lock().unwrap().push(msg.to_string());
    }
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.tasks.lock().unwrap().push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }
}

/// An isolated workspace backed by a [`tempfile::TempDir`].
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read workspace file")
    }

    /// Load `xtask.toml` the way the runner does.
    pub fn config(&self) -> Config {
        Config::load(&self.path(CONFIG_FILE)).expect("load config")
    }

    /// A context over this workspace with fresh test doubles.
    pub fn context(&self, exec: Recorder, dry_run: bool) -> (Context, Arc<Recorder>, Arc<Journal>) {
        let exec = Arc::new(exec);
        let log = Arc::new(Journal::default());
        let ctx = Context::new(
            self.root().to_path_buf(),
            self.config(),
            Arc::clone(&log) as Arc<dyn Log>,
            Arc::clone(&exec) as Arc<dyn Executor>,
            dry_run,
        );
        (ctx, exec, log)
    }
}

/// Fluent builder for [`Workspace`].
pub struct WorkspaceBuilder {
    ws: Workspace,
}

impl WorkspaceBuilder {
    /// A workspace holding only a `Cargo.toml`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"serde-url\"\n",
        )
        .expect("write Cargo.toml");
        Self {
            ws: Workspace { dir },
        }
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.ws.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write file");
        self
    }

    pub fn with_config(self, content: &str) -> Self {
        self.with_file(CONFIG_FILE, content)
    }

    /// The static index page plus the output a `cargo doc` run leaves.
    pub fn with_generated_docs(self) -> Self {
        self.with_file("index.html", "<h1>serde-url</h1>")
            .with_file("target/doc/serde_url/index.html", "api")
            .with_file("target/doc/search-index.js", "[]")
    }

    /// Documentation published by an earlier run.
    pub fn with_stale_docs(self) -> Self {
        self.with_file("docs/old_crate/index.html", "stale")
    }

    pub fn build(self) -> Workspace {
        self.ws
    }
}
