//! Local source-directory matching

use std::path::PathBuf;

use crate::config::dedup_preserving_order;
use crate::locator::Locator;

/// The configured set of filesystem roots searched for package checkouts.
///
/// A root matches a package when `<root>/<package>` exists and is a
/// directory. Pure filesystem reads, no network access.
#[derive(Debug, Clone, Default)]
pub struct LocalRoots {
    roots: Vec<PathBuf>,
}

impl LocalRoots {
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots: dedup_preserving_order(roots)
                .into_iter()
                .map(PathBuf::from)
                .collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Collect every root holding a subdirectory named exactly `package`
    pub fn resolve(&self, package: &str) -> Vec<Locator> {
        self.roots
            .iter()
            .map(|root| root.join(package))
            .filter(|path| path.is_dir())
            .map(Locator::local)
            .collect()
    }
}
