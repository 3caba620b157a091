//! One-shot catalog generation.

use anyhow::Result;
use propdoc_catalog::{CatalogGenerator, TracingReporter};

use crate::config::Settings;

/// Run a single generation pass.
///
/// A failed write is already logged by the reporter. It only fails the
/// process when `fail_on_write_error` is set.
pub fn run(settings: Settings) -> Result<()> {
    tracing::info!(
        "Generating component data from {}",
        settings.catalog.components_dir.display()
    );

    let generator = CatalogGenerator::new(settings.catalog);
    let report = generator.run(&TracingReporter);

    tracing::debug!(
        "Extracted {} components for {} in {}ms",
        report.extracted,
        report.output_path.display(),
        report.duration_ms
    );

    if let Err(e) = report.write {
        if settings.fail_on_write_error {
            return Err(e.into());
        }
    }

    Ok(())
}
