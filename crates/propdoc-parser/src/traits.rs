//! Trait definitions for metadata parsers.

use std::path::Path;

use crate::props::PropTable;

/// Documentation recovered from a single component module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocInfo {
    /// Name of the resolved component definition, when it has one
    pub display_name: Option<String>,

    /// Doc comment attached to the component definition (empty when absent)
    pub description: String,

    /// Declared props in declaration order
    pub props: PropTable,
}

/// Errors that can occur while parsing a component module.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("No suitable component definition found.")]
    NoComponent,
}

/// Trait for source-to-metadata parsers.
pub trait MetadataParser: Send + Sync {
    /// Parser identifier (e.g., "react")
    fn name(&self) -> &'static str;

    /// Parse a module's source text into documentation metadata.
    ///
    /// # Arguments
    /// * `source` - The module source text
    /// * `path` - Where the source came from; used to pick the source dialect
    fn parse(&self, source: &str, path: &Path) -> Result<DocInfo, ParseError>;
}
