use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a package:\n    gitpip remove requests\n\n\
                  Uninstall several packages:\n    gitpip remove requests mytool")]
pub struct RemoveArgs {
    /// Packages to uninstall (passed to pip as-is, no resolution)
    #[arg(value_name = "PACKAGE", num_args = 1.., required = true)]
    pub packages: Vec<String>,
}
