#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for target resolution and the `list` output.

use std::any::TypeId;
use std::collections::HashSet;

use xtask::targets::{self, Target};

/// Regression guard for the listing printed by `xtask list`.
#[test]
fn target_listing() {
    insta::assert_snapshot!("target_listing", targets::describe().trim_end());
}

/// `doc` has no steps of its own; its plan is exactly the `docs` plan.
#[test]
fn doc_plan() {
    let plan = targets::plan(Target::Doc).unwrap();
    let names: Vec<&str> = plan.iter().map(|t| t.name()).collect();
    insta::assert_snapshot!("doc_plan", names.join("\n"));
}

#[test]
fn every_step_name_is_unique() {
    let mut seen = HashSet::new();
    for target in Target::ALL {
        for step in target.steps() {
            assert!(seen.insert(step.name().to_string()), "duplicate {}", step.name());
        }
    }
}

/// Every dependency a step declares is satisfied by an earlier step of the
/// same plan.
#[test]
fn plans_respect_step_dependencies() {
    for target in Target::ALL {
        let plan = targets::plan(target).unwrap();
        let mut done: Vec<TypeId> = Vec::new();
        for step in &plan {
            for dep in step.dependencies() {
                assert!(
                    done.contains(dep),
                    "{target}: {} runs before its dependency",
                    step.name()
                );
            }
            done.push(step.task_id());
        }
    }
}
