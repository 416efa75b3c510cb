//! Command implementations for the gitpip CLI

pub mod completions;
pub mod install;
pub mod remove;
pub mod sources;
