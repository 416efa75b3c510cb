use clap::Parser;

/// Arguments for the users and locals list-management commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remember GitHub users to probe:\n    gitpip users --add alice bob\n\n\
                  Forget a user:\n    gitpip users --remove alice\n\n\
                  Remember a local source root:\n    gitpip locals --add ~/repos\n\n\
                  List the configured entries:\n    gitpip users")]
pub struct SourceListArgs {
    /// Entries to add to the configured list
    #[arg(long, value_name = "ENTRY", num_args = 1..)]
    pub add: Vec<String>,

    /// Entries to drop from the configured list
    #[arg(long, value_name = "ENTRY", num_args = 1..)]
    pub remove: Vec<String>,
}
