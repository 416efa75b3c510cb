//! Batch resolution driver
//!
//! Resolves every requested package name against one source set, in
//! request order. Unresolved names are collected and reported together
//! at the end of the batch so the operator sees every failure in one
//! pass; ambiguous names go through the shared disambiguation prompt.

use crate::error::{GitpipError, Result};
use crate::locator::Locator;
use crate::probe::Probe;
use crate::progress::ProbeSpinner;
use crate::prompt::{self, PromptInput};

use super::{LocalRoots, Userbase};

/// The candidate hosts probed for a request batch
pub enum SourceSet {
    /// PyPI index plus the GitHub userbase
    Forge(Userbase),
    /// Local source roots only
    Local(LocalRoots),
}

impl SourceSet {
    fn candidates(&self, package: &str, probe: &dyn Probe) -> Vec<Locator> {
        match self {
            SourceSet::Forge(userbase) => {
                let spinner = ProbeSpinner::new(package);
                let found = userbase.resolve(package, probe);
                spinner.finish();
                found
            }
            SourceSet::Local(roots) => roots.resolve(package),
        }
    }

    /// Human-readable description of what was probed, for error reporting
    fn probed_description(&self) -> String {
        match self {
            SourceSet::Forge(userbase) if userbase.users().is_empty() => "PyPI".to_string(),
            SourceSet::Forge(userbase) => {
                format!("PyPI, GitHub users ({})", userbase.users().join(", "))
            }
            SourceSet::Local(roots) => format!(
                "local roots ({})",
                roots
                    .roots()
                    .iter()
                    .map(|r| format!("'{}'", r.display()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// Resolves a request batch with deferred error reporting
pub struct Resolver<'a> {
    probe: &'a dyn Probe,
    input: &'a mut dyn PromptInput,
}

impl<'a> Resolver<'a> {
    pub fn new(probe: &'a dyn Probe, input: &'a mut dyn PromptInput) -> Self {
        Self { probe, input }
    }

    /// Resolve every name in `names` against `sources`, preserving
    /// request order in the output.
    ///
    /// A name with no candidates does not stop the batch; after all
    /// names are processed, any unresolved ones fail the whole batch
    /// together (all-or-nothing, nothing is installed). A name with
    /// several candidates is narrowed to one via the prompt.
    pub fn resolve_all(&mut self, names: &[String], sources: &SourceSet) -> Result<Vec<Locator>> {
        let mut chosen = Vec::with_capacity(names.len());
        let mut unresolved = Vec::new();

        for name in names {
            let candidates = sources.candidates(name, self.probe);
            match candidates.as_slice() {
                [] => unresolved.push(name.clone()),
                [only] => chosen.push(only.clone()),
                _ => {
                    let selected =
                        prompt::choose(name, &candidates, Locator::installer_arg, self.input)?;
                    chosen.push(selected.clone());
                }
            }
        }

        if !unresolved.is_empty() {
            return Err(GitpipError::UnresolvedPackages {
                packages: unresolved,
                probed: sources.probed_description(),
            });
        }

        Ok(chosen)
    }
}
