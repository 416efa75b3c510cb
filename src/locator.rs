//! Candidate source locators
//!
//! A [`Locator`] identifies one installable source for a package: the PyPI
//! index, a GitHub user's repository, or a local source directory. Each
//! variant renders itself into the argument string pip expects.

use std::fmt;
use std::path::{Path, PathBuf};

/// One candidate source for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// The package on the PyPI index, by bare name
    Index { package: String },
    /// A GitHub repository `<user>/<package>`
    Forge { user: String, package: String },
    /// A checked-out source directory, installed in editable mode
    LocalPath { path: PathBuf },
}

impl Locator {
    pub fn index(package: impl Into<String>) -> Self {
        Locator::Index {
            package: package.into(),
        }
    }

    pub fn forge(user: impl Into<String>, package: impl Into<String>) -> Self {
        Locator::Forge {
            user: user.into(),
            package: package.into(),
        }
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Locator::LocalPath { path: path.into() }
    }

    /// URL probed to decide whether this source exists.
    ///
    /// Local paths are checked on the filesystem instead and have no URL.
    pub fn probe_url(&self) -> Option<String> {
        match self {
            Locator::Index { package } => {
                Some(format!("https://pypi.org/project/{}/", package))
            }
            Locator::Forge { user, package } => {
                Some(format!("https://github.com/{}/{}", user, package))
            }
            Locator::LocalPath { .. } => None,
        }
    }

    /// The argument string handed to pip for this source
    pub fn installer_arg(&self) -> String {
        match self {
            Locator::Index { package } => package.clone(),
            Locator::Forge { user, package } => {
                format!("git+https://github.com/{}/{}", user, package)
            }
            Locator::LocalPath { path } => path.display().to_string(),
        }
    }

    /// Local sources are installed with pip's editable flag
    pub fn is_editable(&self) -> bool {
        matches!(self, Locator::LocalPath { .. })
    }

    /// The installed directory for a local source, if any
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Locator::LocalPath { path } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.installer_arg())
    }
}
