//! Install and update commands
//!
//! Both commands resolve the requested names first and only then invoke
//! pip, so a batch with any unresolved name installs nothing. Update
//! differs from install only in the pip action (`--force-reinstall
//! --no-deps`); it always re-resolves, with no memory of a previously
//! chosen source.

use console::Style;

use crate::cli::InstallArgs;
use crate::config::{self, ConfigStore, LOCALS_KEY, USERS_KEY};
use crate::error::Result;
use crate::executor::{Action, PipExecutor};
use crate::locator::Locator;
use crate::probe::HttpProbe;
use crate::prompt::StdinInput;
use crate::resolver::{LocalRoots, Resolver, SourceSet, Userbase};

pub fn run(args: InstallArgs, action: Action) -> Result<()> {
    let store = ConfigStore::open()?;
    let executor = PipExecutor::locate()?;

    // Persisted entries first, then this run's extras
    let source_set = match &args.locals {
        Some(extra_roots) => {
            let mut roots = store.load(LOCALS_KEY)?;
            roots.extend(extra_roots.iter().cloned());
            SourceSet::Local(LocalRoots::new(roots))
        }
        None => {
            let mut users = store.load(USERS_KEY)?;
            users.extend(args.users.iter().cloned());
            SourceSet::Forge(Userbase::new(users))
        }
    };

    let probe = HttpProbe::new();
    let mut input = StdinInput;
    let resolved = Resolver::new(&probe, &mut input).resolve_all(&args.packages, &source_set)?;

    for (name, locator) in args.packages.iter().zip(&resolved) {
        println!(
            "{} {} {}",
            Style::new().green().apply_to("✓"),
            Style::new().bold().apply_to(name),
            Style::new().dim().apply_to(format!("-> {}", locator))
        );
    }

    let editable = matches!(source_set, SourceSet::Local(_));
    executor.run(action, &pip_args(&resolved, editable))?;

    if editable {
        cleanup_editable_artifacts(&resolved);
    }
    Ok(())
}

/// pip argument list for a resolved batch: cache dir, the editable flag in
/// local mode, then one source string per package in request order
fn pip_args(resolved: &[Locator], editable: bool) -> Vec<String> {
    let cache = config::cache_dir();
    let _ = std::fs::create_dir_all(&cache);

    let mut args = vec!["--cache-dir".to_string(), cache.display().to_string()];
    if editable {
        args.push("-e".to_string());
    }
    args.extend(resolved.iter().map(Locator::installer_arg));
    args
}

/// Best-effort removal of the build metadata pip leaves inside an
/// editable checkout: `<path>/<name>.egg-info/` and
/// `<path>/<name>/__pycache__/`. Errors are ignored.
fn cleanup_editable_artifacts(resolved: &[Locator]) {
    for path in resolved.iter().filter_map(Locator::local_path) {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let _ = std::fs::remove_dir_all(path.join(format!("{}.egg-info", name)));
        let _ = std::fs::remove_dir_all(path.join(&name).join("__pycache__"));
    }
}
