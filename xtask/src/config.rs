//! `xtask.toml` settings with defaults matching the stock targets.
//!
//! Every key is optional. A missing file is the same as an empty one, so a
//! fresh checkout runs with the defaults below.
//!
//! ```toml
//! [install]
//! components = ["clippy", "rustfmt"]
//!
//! [test]
//! format = true
//! backup_glob = "src/**/*.bk"
//!
//! [docs]
//! jobs = 4
//! quiet = true
//! relocate = true
//! index_page = "index.html"
//! output_dir = "docs"
//! generated_dir = "target/doc"
//! ```
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Name of the settings file looked up in the workspace root.
pub const CONFIG_FILE: &str = "xtask.toml";

/// Complete runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Settings for `install-deps`.
    pub install: InstallConfig,
    /// Settings for `test`.
    pub test: TestConfig,
    /// Settings for `docs`.
    pub docs: DocsConfig,
}

/// Toolchain components added by `install-deps`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// Component names passed to `rustup component add`, one command each.
    pub components: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            components: vec!["clippy".to_string(), "rustfmt".to_string()],
        }
    }
}

/// Formatter settings for `test`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    /// Run `cargo fmt` and the backup cleanup after the linter.
    pub format: bool,
    /// Glob, relative to the workspace root, of formatter backup files.
    pub backup_glob: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            format: true,
            backup_glob: "src/**/*.bk".to_string(),
        }
    }
}

/// Documentation settings for `docs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Value of the `-j` flag passed to `cargo doc`.
    pub jobs: u32,
    /// Pass `-q` to `cargo doc`.
    pub quiet: bool,
    /// Overlay the index page and move the output to `output_dir`.
    pub relocate: bool,
    /// Static index page copied into the generated output.
    pub index_page: PathBuf,
    /// Directory the published documentation ends up in.
    pub output_dir: PathBuf,
    /// Directory `cargo doc` writes to.
    pub generated_dir: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            quiet: true,
            relocate: true,
            index_page: PathBuf::from("index.html"),
            output_dir: PathBuf::from("docs"),
            generated_dir: PathBuf::from("target/doc"),
        }
    }
}

/// A non-fatal configuration problem reported before running a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted key the warning is about, e.g. `docs.jobs`.
    pub key: String,
    /// Human-readable description.
    pub message: String,
}

impl ConfigWarning {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

impl Config {
    /// Load `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// and [`ConfigError::Parse`] if it is not valid for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML `content`; `origin` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML or unknown keys.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Collect warnings for settings that will make a target misbehave.
    ///
    /// `root` resolves the relative paths in the config.
    #[must_use]
    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.install.components.is_empty() {
            warnings.push(ConfigWarning::new(
                "install.components",
                "no components listed; install-deps will do nothing",
            ));
        }
        for component in &self.install.components {
            if component.trim().is_empty() || component.chars().any(char::is_whitespace) {
                warnings.push(ConfigWarning::new(
                    "install.components",
                    format!("'{component}' is not a valid component name"),
                ));
            }
        }

        if self.docs.jobs == 0 {
            warnings.push(ConfigWarning::new(
                "docs.jobs",
                "0 jobs is rejected by cargo doc",
            ));
        }
        if self.docs.relocate && !root.join(&self.docs.index_page).is_file() {
            warnings.push(ConfigWarning::new(
                "docs.index_page",
                format!(
                    "{} does not exist; docs will fail",
                    self.docs.index_page.display()
                ),
            ));
        }

        warnings
    }
}
