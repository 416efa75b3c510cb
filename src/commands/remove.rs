//! Remove command
//!
//! No resolution involved; the names are handed to `pip uninstall` as-is.

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::executor::{Action, PipExecutor};

pub fn run(args: RemoveArgs) -> Result<()> {
    let executor = PipExecutor::locate()?;
    executor.run(Action::Uninstall, &args.packages)
}
