//! Domain-specific error types for the task runner.
//!
//! Internal modules return typed errors ([`ConfigError`], [`TaskError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! XtaskError
//! ├── Config(ConfigError): reading or parsing xtask.toml
//! └── Task(TaskError):     step execution and step ordering
//! ```

use thiserror::Error;

/// Top-level error type for the task runner.
#[derive(Error, Debug)]
pub enum XtaskError {
    /// Configuration-related error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Step execution error.
    #[error("Task execution error: {0}")]
    Task(#[from] TaskError),
}

/// Errors that arise while loading `xtask.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unexpected keys.
    #[error("Invalid config in {path}: {message}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors that arise while running a target's steps.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A step failed to execute.
    #[error("Task '{task}' failed: {reason}")]
    ExecutionFailed {
        /// Name of the step that failed.
        task: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The step dependency graph contains a cycle.
    #[error("Task dependency cycle detected: {0}")]
    DependencyCycle(String),

    /// A path the step needs does not exist.
    #[error("Required path '{0}' not found")]
    MissingPath(String),
}
