#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! Integration tests for the `doc` and `docs` targets.
//!
//! Each test builds a temporary workspace in which `cargo doc` has already
//! produced `target/doc`, then runs the whole target with a recording
//! executor and checks the published tree.

mod common;

use common::{Recorder, WorkspaceBuilder};
use xtask::commands::run_target;
use xtask::logging::TaskStatus;
use xtask::targets::Target;

#[test]
fn docs_publishes_a_single_fresh_tree() {
    let ws = WorkspaceBuilder::new()
        .with_generated_docs()
        .with_stale_docs()
        .build();
    let (ctx, exec, log) = ws.context(Recorder::default(), false);

    run_target(Target::Docs, &ctx).unwrap();

    assert_eq!(exec.calls(), vec!["cargo doc -j4 -q"]);
    assert_eq!(ws.read("docs/index.html"), "<h1>serde-url</h1>");
    assert_eq!(ws.read("docs/serde_url/index.html"), "api");
    assert!(!ws.path("docs/old_crate").exists(), "stale docs remain");
    assert!(!ws.path("target/doc").exists());
    assert!(
        log.entries().iter().all(|e| e.status == TaskStatus::Ok),
        "{:?}",
        log.entries()
    );
}

#[test]
fn doc_triggers_docs() {
    let ws = WorkspaceBuilder::new().with_generated_docs().build();
    let (ctx, exec, log) = ws.context(Recorder::default(), false);

    run_target(Target::Doc, &ctx).unwrap();

    assert_eq!(exec.calls(), vec!["cargo doc -j4 -q"]);
    assert_eq!(log.entries().len(), 3);
    assert!(ws.path("docs/index.html").is_file());
}

#[test]
fn failed_generation_keeps_previous_docs() {
    let ws = WorkspaceBuilder::new()
        .with_generated_docs()
        .with_stale_docs()
        .build();
    let (ctx, _exec, log) = ws.context(Recorder::failing("cargo doc"), false);

    let err = run_target(Target::Docs, &ctx).unwrap_err();

    assert!(err.to_string().contains("Generate docs"), "got: {err}");
    assert!(ws.path("docs/old_crate/index.html").is_file());
    let statuses: Vec<TaskStatus> = log.entries().iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![TaskStatus::Failed, TaskStatus::Skipped, TaskStatus::Skipped]
    );
}

#[test]
fn missing_index_page_stops_before_publishing() {
    let ws = WorkspaceBuilder::new()
        .with_file("target/doc/serde_url/index.html", "api")
        .with_stale_docs()
        .build();
    let (ctx, _exec, log) = ws.context(Recorder::default(), false);

    let err = run_target(Target::Docs, &ctx).unwrap_err();

    assert!(err.to_string().contains("Overlay index page"), "got: {err}");
    assert!(ws.path("docs/old_crate").exists());
    assert!(ws.path("target/doc/serde_url").exists());
    assert_eq!(log.statuses()[2].1, TaskStatus::Skipped);
}

#[test]
fn relocation_can_be_disabled() {
    let ws = WorkspaceBuilder::new()
        .with_config("[docs]\nrelocate = false\njobs = 2\nquiet = false\n")
        .with_generated_docs()
        .with_stale_docs()
        .build();
    let (ctx, exec, log) = ws.context(Recorder::default(), false);

    run_target(Target::Docs, &ctx).unwrap();

    assert_eq!(exec.calls(), vec!["cargo doc -j2"]);
    assert!(ws.path("target/doc/serde_url").exists());
    assert!(ws.path("docs/old_crate").exists());
    let statuses: Vec<TaskStatus> = log.entries().iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::Ok,
            TaskStatus::NotApplicable,
            TaskStatus::NotApplicable
        ]
    );
}

#[test]
fn dry_run_only_describes() {
    let ws = WorkspaceBuilder::new()
        .with_generated_docs()
        .with_stale_docs()
        .build();
    let (ctx, exec, log) = ws.context(Recorder::default(), true);

    run_target(Target::Doc, &ctx).unwrap();

    assert!(exec.calls().is_empty());
    assert!(ws.path("docs/old_crate").exists());
    assert!(ws.path("target/doc/serde_url").exists());
    let dry_runs = log.dry_runs();
    assert_eq!(dry_runs.len(), 4, "{dry_runs:?}");
    assert!(dry_runs[0].starts_with("cargo doc -j4 -q"));
    assert!(dry_runs[2].starts_with("rm -rf "));
}
