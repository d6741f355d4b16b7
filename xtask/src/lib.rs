//! Workspace task runner for serde-url.
//!
//! Replaces the old makefile targets with named, dependency-ordered steps
//! that shell out to the cargo toolchain and post-process its output.
//!
//! - **[`config`]**: optional `xtask.toml` settings
//! - **[`tasks`]**: individual steps and their ordering
//! - **[`targets`]**: the `install-deps`, `test`, `docs` and `doc` targets
//! - **[`commands`]**: workspace resolution and fail-fast target execution
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod targets;
pub mod tasks;
