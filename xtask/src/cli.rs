use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the workspace task runner.
#[derive(Parser, Debug)]
#[command(
    name = "xtask",
    about = "Test, lint, format and document the serde-url workspace",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Override the workspace root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Print the steps without running them
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Read settings from this file instead of `<root>/xtask.toml`
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Install the clippy and rustfmt toolchain components
    InstallDeps,
    /// Run the test suite, the linter and the formatter
    Test,
    /// Generate documentation (runs `docs`)
    Doc,
    /// Generate documentation and publish it to `docs/`
    Docs,
    /// List targets with their prerequisites and steps
    List,
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the per-command log file.
    #[must_use]
    pub const fn log_name(self) -> &'static str {
        match self {
            Self::InstallDeps => "install-deps",
            Self::Test => "test",
            Self::Doc => "doc",
            Self::Docs => "docs",
            Self::List => "list",
            Self::Version => "version",
        }
    }
}
