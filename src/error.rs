//! Error types and handling for gitpip
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gitpip operations
#[derive(Error, Diagnostic, Debug)]
pub enum GitpipError {
    // Resolution errors
    #[error("{} not found. Looked up on: {probed}", format_packages(.packages))]
    #[diagnostic(
        code(gitpip::resolve::unresolved),
        help(
            "Add more GitHub users with 'gitpip users --add USER' or more local roots with 'gitpip locals --add ROOT'"
        )
    )]
    UnresolvedPackages {
        packages: Vec<String>,
        probed: String,
    },

    #[error("Package '{package}' was found on multiple sources: {}", .sources.join(", "))]
    #[diagnostic(
        code(gitpip::resolve::conflict),
        help("Re-run interactively to choose one of the candidate sources")
    )]
    ConflictingSources {
        package: String,
        sources: Vec<String>,
    },

    // Executor errors
    #[error("Could not find a pip executable")]
    #[diagnostic(
        code(gitpip::executor::not_found),
        help("Install pip, or make sure 'pip' or 'pip3' is on PATH")
    )]
    ExecutorNotFound,

    #[error("pip {action} exited with status {code}")]
    #[diagnostic(code(gitpip::executor::failed))]
    ExecutorFailed { action: String, code: i32 },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(gitpip::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}")]
    #[diagnostic(code(gitpip::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("No user configuration directory available on this platform")]
    #[diagnostic(
        code(gitpip::config::no_dir),
        help("Set GITPIP_CONFIG_DIR to a writable directory")
    )]
    ConfigDirUnavailable,

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(gitpip::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GitpipError {
    fn from(err: std::io::Error) -> Self {
        GitpipError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GitpipError>;

/// "Package 'a'" / "Packages 'a', 'b'" phrasing for the unresolved error
fn format_packages(packages: &[String]) -> String {
    match packages {
        [] => "Package".to_string(),
        [one] => format!("Package '{}'", one),
        many => format!(
            "Packages {}",
            many.iter()
                .map(|p| format!("'{}'", p))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
