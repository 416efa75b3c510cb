//! Common test utilities for gitpip integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated environment for integration tests: its own config and
/// cache directories plus a fake pip executable that records its argv.
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory backing the whole environment
    pub temp: TempDir,
    /// Config directory handed to the binary via GITPIP_CONFIG_DIR
    pub config_dir: PathBuf,
    /// Cache directory handed to the binary via GITPIP_CACHE_DIR
    pub cache_dir: PathBuf,
    /// Where the fake pip appends one line per invocation
    pub pip_capture: PathBuf,
    /// The fake pip executable
    pub pip_bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp.path().join("config");
        let cache_dir = temp.path().join("cache");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create cache dir");

        let pip_capture = temp.path().join("pip_args.txt");
        let pip_bin = temp.path().join("fake-pip");
        write_fake_pip(&pip_bin, &pip_capture);

        Self {
            temp,
            config_dir,
            cache_dir,
            pip_capture,
            pip_bin,
        }
    }

    /// A gitpip command wired to this environment
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitpip").expect("Failed to find gitpip binary");
        cmd.env("GITPIP_CONFIG_DIR", &self.config_dir)
            .env("GITPIP_CACHE_DIR", &self.cache_dir)
            .env("GITPIP_PIP", &self.pip_bin);
        cmd
    }

    /// Seed a config list file (key "users" or "locals")
    pub fn write_list(&self, key: &str, entries: &[&str]) {
        let content = entries
            .iter()
            .map(|e| format!("{}\n", e))
            .collect::<String>();
        std::fs::write(self.config_dir.join(format!("{}.txt", key)), content)
            .expect("Failed to write list file");
    }

    /// Read back a config list file
    pub fn read_list(&self, key: &str) -> String {
        std::fs::read_to_string(self.config_dir.join(format!("{}.txt", key)))
            .expect("Failed to read list file")
    }

    /// Create `<root>/<name>` as a package checkout, returning its path
    pub fn create_package(&self, root: &str, name: &str) -> PathBuf {
        let path = self.temp.path().join(root).join(name);
        std::fs::create_dir_all(&path).expect("Failed to create package directory");
        path
    }

    /// Absolute path of a local root inside the environment
    pub fn root_path(&self, root: &str) -> String {
        self.temp.path().join(root).display().to_string()
    }

    /// Everything the fake pip was invoked with, one line per invocation
    pub fn pip_invocations(&self) -> String {
        std::fs::read_to_string(&self.pip_capture).unwrap_or_default()
    }

    /// Whether the fake pip ran at all
    pub fn pip_ran(&self) -> bool {
        self.pip_capture.exists()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_fake_pip(bin: &std::path::Path, capture: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nexit 0\n", capture.display());
    std::fs::write(bin, script).expect("Failed to write fake pip");
    std::fs::set_permissions(bin, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake pip executable");
}

#[cfg(windows)]
fn write_fake_pip(bin: &std::path::Path, capture: &std::path::Path) {
    // cmd batch shim; tests that exercise pip are unix-gated but the
    // environment still needs a spawnable file
    let bin = bin.with_extension("bat");
    let script = format!("@echo %* >> \"{}\"\r\n", capture.display());
    std::fs::write(bin, script).expect("Failed to write fake pip");
}
