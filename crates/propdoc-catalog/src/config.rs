//! Catalog generation settings.

use std::path::PathBuf;

/// Where to read components and examples from, and where to write the data module.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// One subdirectory per component: `<components_dir>/<Name>/<Name>.<ext>`
    pub components_dir: PathBuf,

    /// One subdirectory per component holding its example files
    pub examples_dir: PathBuf,

    /// Generated data module
    pub output_path: PathBuf,

    /// Extensions tried, in order, when locating a component's primary source
    pub extensions: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            components_dir: PathBuf::from("src/components"),
            examples_dir: PathBuf::from("src/docs/examples"),
            output_path: PathBuf::from("config/componentData.js"),
            extensions: default_extensions(),
        }
    }
}

pub fn default_extensions() -> Vec<String> {
    ["js", "jsx", "tsx", "ts"]
        .into_iter()
        .map(String::from)
        .collect()
}
