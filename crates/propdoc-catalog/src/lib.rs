//! Component catalog generation.
//!
//! Scans a components directory and an examples directory, extracts
//! documentation metadata for every component, and writes the whole catalog
//! to a single JavaScript data module.

pub mod config;
pub mod extract;
pub mod generator;
pub mod output;
pub mod record;
pub mod reporter;
pub mod scanner;

pub use config::CatalogConfig;
pub use extract::{Examples, ExtractionError, Extractor};
pub use generator::{CatalogGenerator, RunReport};
pub use output::{parse_module, render_module, write_artifact, ModuleError, WriteError, MODULE_PREFIX};
pub use record::{Artifact, ComponentRecord, ExampleRecord};
pub use reporter::{MemoryReporter, Notice, Reporter, TracingReporter};
pub use scanner::{list_component_names, list_example_files, ExampleListing, ScanError};
