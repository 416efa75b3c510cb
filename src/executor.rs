//! Pip discovery and invocation
//!
//! gitpip never installs anything itself; the resolved source strings are
//! handed to the system pip. Discovery order: the `GITPIP_PIP` override,
//! then the Windows launcher's module invocation, then the first of
//! `pip`/`pip3` that answers `--version`.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::error::{GitpipError, Result};

/// The pip action to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    /// `install --force-reinstall --no-deps`, used by the update command
    Reinstall,
}

impl Action {
    /// Leading pip arguments for this action
    pub fn argv(self) -> &'static [&'static str] {
        match self {
            Action::Install => &["install"],
            Action::Uninstall => &["uninstall"],
            Action::Reinstall => &["install", "--force-reinstall", "--no-deps"],
        }
    }

    fn name(self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Uninstall => "uninstall",
            Action::Reinstall => "reinstall",
        }
    }
}

/// Handle to the located pip tool
pub struct PipExecutor {
    program: OsString,
    prelude: Vec<&'static str>,
}

impl PipExecutor {
    /// Locate a pip executable, failing loudly when none is found
    pub fn locate() -> Result<Self> {
        if let Some(program) = std::env::var_os("GITPIP_PIP") {
            return Ok(Self {
                program,
                prelude: Vec::new(),
            });
        }

        if cfg!(windows) {
            // The Python launcher ships with every Windows install
            return Ok(Self {
                program: OsString::from("py"),
                prelude: vec!["-m", "pip"],
            });
        }

        for candidate in ["pip", "pip3"] {
            if answers_version(candidate) {
                return Ok(Self {
                    program: OsString::from(candidate),
                    prelude: Vec::new(),
                });
            }
        }

        Err(GitpipError::ExecutorNotFound)
    }

    /// Run `pip <action> <args...>` with inherited stdio
    pub fn run(&self, action: Action, args: &[String]) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.prelude)
            .args(action.argv())
            .args(args)
            .status()
            .map_err(|e| GitpipError::IoError {
                message: format!("Failed to spawn pip: {}", e),
            })?;

        if !status.success() {
            return Err(GitpipError::ExecutorFailed {
                action: action.name().to_string(),
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}

fn answers_version(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
