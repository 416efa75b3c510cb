//! Package-name resolution
//!
//! A bare package name is resolved to an installable source by probing a
//! set of candidate hosts: the PyPI index plus the configured GitHub
//! userbase ([`forge`]), or the configured local source roots ([`local`]).
//! The [`driver`] runs a whole request batch and owns the shared
//! ambiguity policy.

pub mod driver;
pub mod forge;
pub mod local;

pub use driver::{Resolver, SourceSet};
pub use forge::Userbase;
pub use local::LocalRoots;
