//! Users and locals list-management commands
//!
//! Both commands share one implementation: load the configured list,
//! apply removals then additions, persist only when something changed,
//! and print the resulting entries in three left-aligned columns.

use crate::cli::SourceListArgs;
use crate::config::ConfigStore;
use crate::error::Result;

pub fn run(key: &str, args: SourceListArgs) -> Result<()> {
    let store = ConfigStore::open()?;
    let mut entries = store.load(key)?;

    if !args.add.is_empty() || !args.remove.is_empty() {
        apply_changes(&mut entries, &args.add, &args.remove);
        store.save(key, &entries)?;
    }

    for row in format_columns(&entries) {
        println!("{}", row);
    }
    Ok(())
}

/// Drop removals, then append additions not already present.
/// Surviving entries keep their first-seen order.
fn apply_changes(entries: &mut Vec<String>, add: &[String], remove: &[String]) {
    entries.retain(|entry| !remove.contains(entry));
    for entry in add {
        if !entries.contains(entry) {
            entries.push(entry.clone());
        }
    }
}

/// Three left-aligned 19-wide columns per row
fn format_columns(entries: &[String]) -> Vec<String> {
    entries
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .map(|entry| format!("{:<19}", entry))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}
