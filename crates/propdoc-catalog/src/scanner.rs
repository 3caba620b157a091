//! Directory scanning for components and examples.
//!
//! Both listings are one level deep and keep the file system's enumeration
//! order; nothing is sorted.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Errors that can occur while listing a directory.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read directory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Files found in a component's examples directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleListing {
    /// File names, in enumeration order
    Files(Vec<String>),

    /// The component has no examples directory
    Missing,
}

/// List the component names under `components_root` (its subdirectories).
pub fn list_component_names(components_root: &Path) -> Result<Vec<String>, ScanError> {
    list_entries(components_root, |entry| entry.file_type().is_dir())
}

/// List the example files for `component` under `examples_root`.
///
/// A missing examples directory is a normal case and yields
/// [`ExampleListing::Missing`] rather than an error.
pub fn list_example_files(
    examples_root: &Path,
    component: &str,
) -> Result<ExampleListing, ScanError> {
    let dir = examples_root.join(component);
    if !dir.is_dir() {
        return Ok(ExampleListing::Missing);
    }

    list_entries(&dir, |entry| entry.file_type().is_file()).map(ExampleListing::Files)
}

fn list_entries(
    dir: &Path,
    keep: impl Fn(&walkdir::DirEntry) -> bool,
) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| ScanError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        if keep(&entry) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}
