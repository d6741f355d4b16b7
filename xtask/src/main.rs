use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use xtask::cli::{Cli, Command};
use xtask::targets::Target;
use xtask::{commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let target = match args.command {
        Command::InstallDeps => Target::InstallDeps,
        Command::Test => Target::Test,
        Command::Doc => Target::Doc,
        Command::Docs => Target::Docs,
        Command::List => {
            commands::list();
            return Ok(());
        }
        Command::Version => {
            let version = option_env!("XTASK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("xtask {version}");
            return Ok(());
        }
    };

    logging::init_subscriber(args.verbose, args.command.log_name());
    let log = Arc::new(logging::Logger::new(args.command.log_name()));
    commands::run(target, &args.global, &log)
}
