//! gitpip - multi-source package resolver front-end for pip
//!
//! Resolves bare package names against PyPI, a configured set of GitHub
//! users, and a configured set of local source directories, then delegates
//! the install/uninstall to the system pip.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod executor;
mod locator;
mod probe;
mod progress;
mod prompt;
mod resolver;

use cli::{Cli, Commands};
use executor::Action;

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args, Action::Install),
        Commands::Update(args) => commands::install::run(args, Action::Reinstall),
        Commands::Remove(args) => commands::remove::run(args),
        Commands::Users(args) => commands::sources::run(config::USERS_KEY, args),
        Commands::Locals(args) => commands::sources::run(config::LOCALS_KEY, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        if debug {
            // Full miette diagnostic with code and help text
            eprintln!("{:?}", miette::Report::new(e));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
