//! Data module rendering and writing.
//!
//! The artifact is written as a CommonJS module whose single export is the
//! JSON-encoded catalog, with a lint suppression comment in front:
//!
//! ```text
//! module.exports = /* eslint-disable */ [{"name":"Button",...}]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::record::Artifact;

/// Everything in front of the JSON payload.
pub const MODULE_PREFIX: &str = "module.exports = /* eslint-disable */ ";

/// Errors that can occur while writing the data module.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to serialize component data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Errors that can occur while reading a data module back.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Data module does not start with `{MODULE_PREFIX}`")]
    MissingPrefix,

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the artifact as module source. Compact JSON, no trailing newline.
pub fn render_module(artifact: &Artifact) -> Result<String, WriteError> {
    let json = serde_json::to_string(artifact)?;
    Ok(format!("{MODULE_PREFIX}{json}"))
}

/// Strip the assignment wrapper and decode the JSON payload.
pub fn parse_module(text: &str) -> Result<serde_json::Value, ModuleError> {
    let json = text
        .strip_prefix(MODULE_PREFIX)
        .ok_or(ModuleError::MissingPrefix)?;
    Ok(serde_json::from_str(json.trim_end_matches(';'))?)
}

/// Overwrite `path` with the rendered artifact.
///
/// Parent directories are created. The write is not atomic: a reader racing
/// the write can observe a truncated file.
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<(), WriteError> {
    let content = render_module(artifact)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn renders_assignment_with_lint_marker() {
        let artifact = Artifact::Errors(vec!["bad".to_string()]);
        assert_eq!(
            render_module(&artifact).unwrap(),
            r#"module.exports = /* eslint-disable */ ["bad"]"#
        );
    }

    #[test]
    fn parses_rendered_module() {
        let artifact = Artifact::Errors(vec!["bad".to_string()]);
        let value = parse_module(&render_module(&artifact).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!(["bad"]));
    }

    #[test]
    fn rejects_plain_json() {
        assert!(matches!(parse_module("[]"), Err(ModuleError::MissingPrefix)));
    }

    #[test]
    fn writes_and_overwrites_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config/componentData.js");

        write_artifact(&path, &Artifact::Errors(vec!["first".into(), "second".into()])).unwrap();
        write_artifact(&path, &Artifact::Components(vec![])).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "module.exports = /* eslint-disable */ []"
        );
    }

    #[test]
    fn reports_unwritable_path() {
        let temp = tempdir().unwrap();
        // A directory can't be overwritten as a file.
        let result = write_artifact(temp.path(), &Artifact::Components(vec![]));
        assert!(matches!(result, Err(WriteError::Io { .. })));
    }
}
