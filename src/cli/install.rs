use clap::Parser;

/// Arguments for the install and update commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve on PyPI and the configured GitHub users:\n    gitpip install requests\n\n\
                  Probe extra GitHub users for this run only:\n    gitpip install mytool -u alice bob\n\n\
                  Resolve against the configured local source roots:\n    gitpip install mytool -l\n\n\
                  Resolve against extra local roots for this run:\n    gitpip install mytool --local ~/src ~/repos")]
pub struct InstallArgs {
    /// Packages to resolve and install
    #[arg(value_name = "PACKAGE", num_args = 1.., required = true)]
    pub packages: Vec<String>,

    /// Extra GitHub users to probe for this run (not persisted)
    #[arg(
        long = "user",
        short = 'u',
        alias = "users",
        value_name = "USER",
        num_args = 1..
    )]
    pub users: Vec<String>,

    /// Resolve against local source roots instead of the network,
    /// optionally adding extra roots for this run
    #[arg(
        long = "local",
        short = 'l',
        alias = "locals",
        value_name = "ROOT",
        num_args = 0..
    )]
    pub locals: Option<Vec<String>>,
}
