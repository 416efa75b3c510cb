//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install/update command arguments
//! - remove: Remove command arguments
//! - sources: Users/locals list-management arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;
pub mod remove;
pub mod sources;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use remove::RemoveArgs;
pub use sources::SourceListArgs;

/// gitpip - multi-source package resolver front-end for pip
///
/// Resolves bare package names against PyPI, a configured set of GitHub
/// users, and a configured set of local source directories, then hands the
/// resolved sources to pip.
#[derive(Parser, Debug)]
#[command(
    name = "gitpip",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Multi-source package resolver front-end for pip",
    long_about = "gitpip resolves each requested package name against PyPI and the \
                  configured GitHub users (or, in local mode, the configured source \
                  directories), asks which source to use when several match, and then \
                  delegates the install to pip.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gitpip install requests              \x1b[90m# Resolve on PyPI and configured users\x1b[0m\n   \
                  gitpip install mytool -u alice       \x1b[90m# Also probe github.com/alice for this run\x1b[0m\n   \
                  gitpip install mytool -l             \x1b[90m# Resolve against local source roots\x1b[0m\n   \
                  gitpip update mytool                 \x1b[90m# Force-reinstall from a re-resolved source\x1b[0m\n   \
                  gitpip users --add alice bob         \x1b[90m# Remember GitHub users to probe\x1b[0m\n   \
                  gitpip locals --add ~/repos          \x1b[90m# Remember a local source root\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Print full diagnostics on failure instead of a one-line message
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages from their resolved sources
    Install(InstallArgs),

    /// Reinstall packages from freshly re-resolved sources
    #[command(visible_aliases = ["upgrade", "reinstall"])]
    Update(InstallArgs),

    /// Uninstall packages
    #[command(visible_alias = "uninstall")]
    Remove(RemoveArgs),

    /// Add/remove the GitHub users probed for packages
    Users(SourceListArgs),

    /// Add/remove the local source directories probed for packages
    Locals(SourceListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["gitpip", "install", "requests"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.packages, vec!["requests".to_string()]);
                assert!(args.users.is_empty());
                assert!(args.locals.is_none());
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_update_aliases() {
        for alias in ["update", "upgrade", "reinstall"] {
            let cli = Cli::try_parse_from(["gitpip", alias, "requests"]).unwrap();
            assert!(matches!(cli.command, Commands::Update(_)), "alias {}", alias);
        }
    }

    #[test]
    fn test_cli_parsing_remove_alias() {
        let cli = Cli::try_parse_from(["gitpip", "uninstall", "requests"]).unwrap();
        match cli.command {
            Commands::Remove(args) => {
                assert_eq!(args.packages, vec!["requests".to_string()]);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_users() {
        let cli =
            Cli::try_parse_from(["gitpip", "users", "--add", "alice", "bob", "--remove", "carol"])
                .unwrap();
        match cli.command {
            Commands::Users(args) => {
                assert_eq!(args.add, vec!["alice".to_string(), "bob".to_string()]);
                assert_eq!(args.remove, vec!["carol".to_string()]);
            }
            _ => panic!("Expected Users command"),
        }
    }

    #[test]
    fn test_cli_global_debug_flag() {
        let cli = Cli::try_parse_from(["gitpip", "install", "requests", "-d"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["gitpip", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "zsh");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_install_requires_packages() {
        assert!(Cli::try_parse_from(["gitpip", "install"]).is_err());
    }
}
