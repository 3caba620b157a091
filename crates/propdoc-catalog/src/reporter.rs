//! Operator notices emitted during a generation pass.

use std::path::Path;
use std::sync::Mutex;

use crate::extract::ExtractionError;
use crate::output::WriteError;
use crate::record::Artifact;

/// Receives the operator-facing notices of a pass.
pub trait Reporter: Send + Sync {
    /// A component has no examples directory.
    fn examples_missing(&self, component: &str);

    /// A component failed to extract. The pass keeps going.
    fn component_failed(&self, component: &str, error: &ExtractionError);

    /// The data module was written.
    fn saved(&self, path: &Path, artifact: &Artifact);

    /// The data module could not be written.
    fn write_failed(&self, error: &WriteError);
}

/// Sends notices to `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn examples_missing(&self, component: &str) {
        tracing::warn!("No examples found for {}.", component);
    }

    fn component_failed(&self, component: &str, error: &ExtractionError) {
        tracing::error!("Failed to generate metadata for {}: {}", component, error);
    }

    fn saved(&self, path: &Path, artifact: &Artifact) {
        match artifact {
            Artifact::Components(components) => tracing::info!(
                "Component data saved. {} components written to {}",
                components.len(),
                path.display()
            ),
            Artifact::Errors(errors) => tracing::warn!(
                "Component data saved with {} errors to {}",
                errors.len(),
                path.display()
            ),
        }
    }

    fn write_failed(&self, error: &WriteError) {
        tracing::error!("{}", error);
    }
}

/// A notice captured by [`MemoryReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ExamplesMissing(String),
    ComponentFailed(String),
    Saved { errors: bool, count: usize },
    WriteFailed(String),
}

/// Keeps notices in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    fn push(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

impl Reporter for MemoryReporter {
    fn examples_missing(&self, component: &str) {
        self.push(Notice::ExamplesMissing(component.to_string()));
    }

    fn component_failed(&self, component: &str, _error: &ExtractionError) {
        self.push(Notice::ComponentFailed(component.to_string()));
    }

    fn saved(&self, _path: &Path, artifact: &Artifact) {
        self.push(Notice::Saved {
            errors: artifact.is_errors(),
            count: artifact.len(),
        });
    }

    fn write_failed(&self, error: &WriteError) {
        self.push(Notice::WriteFailed(error.to_string()));
    }
}
