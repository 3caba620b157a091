//! Catalog generation pass.

use std::path::PathBuf;
use std::time::Instant;

use propdoc_parser::{MetadataParser, ReactDocParser};

use crate::config::CatalogConfig;
use crate::extract::{Examples, ExtractionError, Extractor};
use crate::output::{write_artifact, WriteError};
use crate::record::{Artifact, ComponentRecord};
use crate::reporter::Reporter;
use crate::scanner::list_component_names;

/// Result of one generation pass.
#[derive(Debug)]
pub struct RunReport {
    /// What was written (or attempted)
    pub artifact: Artifact,

    /// Components that extracted successfully, including ones discarded
    /// because a sibling failed
    pub extracted: usize,

    /// Output path
    pub output_path: PathBuf,

    /// Total pass time in milliseconds
    pub duration_ms: u64,

    /// Outcome of writing the data module
    pub write: Result<(), WriteError>,
}

impl RunReport {
    /// Whether any component failed to extract.
    pub fn has_errors(&self) -> bool {
        self.artifact.is_errors()
    }
}

/// Generates the component data module.
pub struct CatalogGenerator {
    config: CatalogConfig,
    parser: Box<dyn MetadataParser>,
}

impl CatalogGenerator {
    /// Create a generator using the React parser.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_parser(config, Box::new(ReactDocParser::new()))
    }

    /// Create a generator with a specific parser.
    pub fn with_parser(config: CatalogConfig, parser: Box<dyn MetadataParser>) -> Self {
        Self { config, parser }
    }

    /// Run one full pass and overwrite the output file.
    ///
    /// A failing component doesn't stop its siblings, but any failure replaces
    /// the whole artifact with the list of error messages. Write failures are
    /// reported and returned in the report, never raised.
    pub fn run(&self, reporter: &dyn Reporter) -> RunReport {
        let start = Instant::now();
        let (artifact, extracted) = self.collect(reporter);

        let write = write_artifact(&self.config.output_path, &artifact);
        match &write {
            Ok(()) => reporter.saved(&self.config.output_path, &artifact),
            Err(e) => reporter.write_failed(e),
        }

        RunReport {
            artifact,
            extracted,
            output_path: self.config.output_path.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
            write,
        }
    }

    /// Extract every component and decide the artifact shape.
    pub fn collect(&self, reporter: &dyn Reporter) -> (Artifact, usize) {
        let names = match list_component_names(&self.config.components_dir) {
            Ok(names) => names,
            Err(e) => {
                return (
                    Artifact::Errors(vec![format!(
                        "An error occurred while scanning {}. {}",
                        self.config.components_dir.display(),
                        e
                    )]),
                    0,
                );
            }
        };

        tracing::debug!(
            "Extracting {} components with the {} parser",
            names.len(),
            self.parser.name()
        );
        let extractor = Extractor::new(self.parser.as_ref(), &self.config.extensions);
        let mut components = Vec::with_capacity(names.len());
        let mut errors = Vec::new();

        for name in names {
            match self.component(&extractor, &name, reporter) {
                Ok(record) => components.push(record),
                Err(e) => {
                    reporter.component_failed(&name, &e);
                    errors.push(format!(
                        "An error occurred while attempting to generate metadata for {}. {}",
                        name, e
                    ));
                }
            }
        }

        let extracted = components.len();
        if errors.is_empty() {
            (Artifact::Components(components), extracted)
        } else {
            (Artifact::Errors(errors), extracted)
        }
    }

    fn component(
        &self,
        extractor: &Extractor<'_>,
        name: &str,
        reporter: &dyn Reporter,
    ) -> Result<ComponentRecord, ExtractionError> {
        let mut record = extractor.component(&self.config.components_dir, name)?;

        record.examples = match extractor.examples(&self.config.examples_dir, name)? {
            Examples::Found(examples) => examples,
            Examples::Missing => {
                reporter.examples_missing(name);
                Vec::new()
            }
        };

        Ok(record)
    }
}
