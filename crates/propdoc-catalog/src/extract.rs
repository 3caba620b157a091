//! Metadata extraction for components and their examples.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use propdoc_parser::{MetadataParser, ParseError};

use crate::record::{ComponentRecord, ExampleRecord};
use crate::scanner::{list_example_files, ExampleListing, ScanError};

/// Errors that can occur while extracting one component.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No source file found at {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Examples found for a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Examples {
    Found(Vec<ExampleRecord>),

    /// The component has no examples directory
    Missing,
}

impl Examples {
    pub fn into_vec(self) -> Vec<ExampleRecord> {
        match self {
            Examples::Found(examples) => examples,
            Examples::Missing => Vec::new(),
        }
    }
}

/// Reads component and example sources and runs them through a parser.
pub struct Extractor<'p> {
    parser: &'p dyn MetadataParser,
    extensions: &'p [String],
}

impl<'p> Extractor<'p> {
    pub fn new(parser: &'p dyn MetadataParser, extensions: &'p [String]) -> Self {
        Self { parser, extensions }
    }

    /// Locate the primary source of a component: `<root>/<name>/<name>.<ext>`.
    ///
    /// Extensions are tried in configured order.
    pub fn locate_source(&self, components_root: &Path, name: &str) -> Result<PathBuf, ExtractionError> {
        let dir = components_root.join(name);

        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| {
                let ext = self.extensions.first().map(String::as_str).unwrap_or("js");
                ExtractionError::MissingSource(dir.join(format!("{name}.{ext}")))
            })
    }

    /// Extract a component's record. The `examples` field is left empty.
    pub fn component(&self, components_root: &Path, name: &str) -> Result<ComponentRecord, ExtractionError> {
        let path = self.locate_source(components_root, name)?;
        let code = read_source(&path)?;
        let info = self
            .parser
            .parse(&code, &path)
            .map_err(|source| ExtractionError::Parse {
                path: path.clone(),
                source,
            })?;

        if info.display_name.as_deref().is_some_and(|n| n != name) {
            tracing::debug!(
                "{} defines {}, documenting it as {}",
                path.display(),
                info.display_name.as_deref().unwrap_or_default(),
                name
            );
        }
        tracing::debug!("Extracted {} props from {}", info.props.len(), path.display());

        Ok(ComponentRecord {
            name: name.to_string(),
            description: info.description,
            props: info.props,
            code,
            examples: Vec::new(),
        })
    }

    /// Extract every example listed for a component.
    ///
    /// Any example that fails to read or parse fails the whole call.
    pub fn examples(&self, examples_root: &Path, name: &str) -> Result<Examples, ExtractionError> {
        let files = match list_example_files(examples_root, name)? {
            ExampleListing::Files(files) => files,
            ExampleListing::Missing => return Ok(Examples::Missing),
        };

        let dir = examples_root.join(name);
        let mut examples = Vec::with_capacity(files.len());

        for file in files {
            let path = dir.join(&file);
            let code = read_source(&path)?;
            let info = self
                .parser
                .parse(&code, &path)
                .map_err(|source| ExtractionError::Parse {
                    path: path.clone(),
                    source,
                })?;

            examples.push(ExampleRecord {
                name: example_name(&file),
                description: info.description,
                code,
            });
        }

        Ok(Examples::Found(examples))
    }
}

/// Example name by convention: the file name without its extension.
fn example_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

fn read_source(path: &Path) -> Result<String, ExtractionError> {
    fs::read_to_string(path).map_err(|source| ExtractionError::Read {
        path: path.to_path_buf(),
        source,
    })
}
