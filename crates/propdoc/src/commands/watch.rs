//! Watch mode: regenerate on every change.

use anyhow::{Context, Result};
use propdoc_catalog::{CatalogGenerator, TracingReporter};
use propdoc_watch::FileWatcher;

use crate::config::Settings;

/// Attach the watcher and regenerate until Ctrl-C.
///
/// No pass runs until the first change arrives.
pub async fn run(settings: Settings) -> Result<()> {
    let watch_paths = vec![
        settings.catalog.components_dir.clone(),
        settings.catalog.examples_dir.clone(),
    ];

    let (watcher, rx) = FileWatcher::new(&watch_paths).context("Failed to start watch mode")?;

    tracing::info!(
        "Watching {} and {} for changes",
        settings.catalog.components_dir.display(),
        settings.catalog.examples_dir.display()
    );

    let generator = CatalogGenerator::new(settings.catalog);
    let mut passes = tokio::task::spawn_blocking(move || {
        propdoc_watch::watch(&generator, &TracingReporter, &rx)
    });

    tokio::select! {
        result = &mut passes => {
            let stats = result.context("Watch loop panicked")?;
            tracing::info!("Watcher stopped after {} passes", stats.passes);
            return Ok(());
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            tracing::info!("Stopping watch mode");
        }
    }

    // Dropping the watcher closes the event channel; the loop exits once the
    // current pass finishes.
    drop(watcher);
    let stats = passes.await.context("Watch loop panicked")?;
    tracing::debug!("Ran {} passes for {} events", stats.passes, stats.events);

    Ok(())
}
