//! Watch mode: rebuild the artifact whenever the org file changes.
//!
//! A sequential consume-event/run loop: block on the next filesystem
//! notification, then run the pipeline once. Rebuilds never overlap, and a
//! failed rebuild only aborts itself; the watcher keeps running and retries
//! on the next change event.

use std::path::Path;
use std::sync::mpsc;

use notify::{Event, RecursiveMode, Watcher};
use tracing::{error, info};

use crate::error::OrgError;
use crate::pipeline;

/// Watch `input` and regenerate `output` on every change to it, starting
/// with one initial build. Returns only if the watcher channel closes.
pub fn watch(input: &Path, output: &Path) -> Result<(), OrgError> {
    // Initial build; a broken org file at startup must not kill the watcher.
    if let Err(e) = pipeline::build(input, output) {
        error!(error = %e, "initial build failed");
    }

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;

    // Watch the containing directory: editors often replace the file
    // wholesale, which unregisters a watch on the file itself.
    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    info!(input = %input.display(), "watching for changes");

    while let Ok(event) = rx.recv() {
        match event {
            Ok(event) if touches_input(&event, input) => {
                info!("change detected, rebuilding");
                if let Err(e) = pipeline::build(input, output) {
                    error!(error = %e, "rebuild failed");
                }
            }
            Ok(_) => {}
            Err(e) => error!(error = %e, "watch error"),
        }
    }

    Ok(())
}

/// Only events touching the input file itself trigger a rebuild. Notification
/// paths are absolute while the configured input may be relative, so compare
/// by file name within the watched directory.
fn touches_input(event: &Event, input: &Path) -> bool {
    let Some(target) = input.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(target))
}
