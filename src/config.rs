//! Configuration store
//!
//! Known GitHub users and local source roots live in newline-delimited
//! text files under the per-user config directory (`<config>/gitpip/`).
//! Files are created empty on first access; they are written back only
//! by the explicit `users`/`locals` mutation commands.

use std::path::PathBuf;

use crate::error::{GitpipError, Result};

/// Key for the persisted GitHub userbase
pub const USERS_KEY: &str = "users";

/// Key for the persisted local source roots
pub const LOCALS_KEY: &str = "locals";

/// Load/save access to the newline-delimited list files
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Open the per-user store, creating the directory if needed.
    ///
    /// `GITPIP_CONFIG_DIR` overrides the platform config directory so
    /// tests can run against an isolated store.
    pub fn open() -> Result<Self> {
        let dir = match std::env::var_os("GITPIP_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(GitpipError::ConfigDirUnavailable)?
                .join("gitpip"),
        };
        std::fs::create_dir_all(&dir).map_err(|e| GitpipError::ConfigWriteFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", key))
    }

    /// Load the list stored under `key`, creating an empty file if absent.
    ///
    /// Entries are trimmed, blank lines skipped, first-seen order kept.
    pub fn load(&self, key: &str) -> Result<Vec<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            self.save(key, &[])?;
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| GitpipError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(dedup_preserving_order(
            content.lines().map(str::trim).filter(|l| !l.is_empty()),
        ))
    }

    /// Persist the list under `key`, one entry per line
    pub fn save(&self, key: &str, values: &[String]) -> Result<()> {
        let path = self.file_path(key);
        let mut content = values.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&path, content).map_err(|e| GitpipError::ConfigWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Per-user cache directory handed to pip via `--cache-dir`
pub fn cache_dir() -> PathBuf {
    match std::env::var_os("GITPIP_CACHE_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("gitpip"),
    }
}

/// Drop duplicates while keeping the first occurrence's position
pub fn dedup_preserving_order<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = Vec::new();
    for value in values {
        let value = value.into();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
