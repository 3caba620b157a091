//! Configuration file (propdoc.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use propdoc_catalog::config::default_extensions;
use propdoc_catalog::CatalogConfig;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    extract: ExtractConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsConfig {
    #[serde(default = "default_components")]
    components: PathBuf,
    #[serde(default = "default_examples")]
    examples: PathBuf,
    #[serde(default = "default_output")]
    output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components: default_components(),
            examples: default_examples(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExtractConfig {
    #[serde(default = "default_extensions")]
    extensions: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputConfig {
    /// Exit non-zero when the data module can't be written
    #[serde(default)]
    fail_on_write_error: bool,
}

fn default_components() -> PathBuf {
    PathBuf::from("src/components")
}
fn default_examples() -> PathBuf {
    PathBuf::from("src/docs/examples")
}
fn default_output() -> PathBuf {
    PathBuf::from("config/componentData.js")
}

/// Resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub fail_on_write_error: bool,
}

/// Load configuration from `path` if it exists.
///
/// Relative paths in the file resolve against the file's directory. Without a
/// file, defaults resolve against the working directory. Returns an error if
/// the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<Settings> {
    let (file, base) = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        (file, path.parent().map(Path::to_path_buf).unwrap_or_default())
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        (ConfigFile::default(), PathBuf::new())
    };

    if file.extract.extensions.is_empty() {
        anyhow::bail!("extract.extensions in {} must not be empty", path.display());
    }

    Ok(Settings {
        catalog: CatalogConfig {
            components_dir: base.join(&file.paths.components),
            examples_dir: base.join(&file.paths.examples),
            output_path: base.join(&file.paths.output),
            extensions: file.extract.extensions,
        },
        fail_on_write_error: file.output.fail_on_write_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn uses_defaults_without_file() {
        let temp = tempdir().unwrap();
        let settings = load_config(&temp.path().join("propdoc.toml")).unwrap();

        assert_eq!(settings.catalog.components_dir, PathBuf::from("src/components"));
        assert_eq!(settings.catalog.examples_dir, PathBuf::from("src/docs/examples"));
        assert_eq!(settings.catalog.output_path, PathBuf::from("config/componentData.js"));
        assert_eq!(settings.catalog.extensions, vec!["js", "jsx", "tsx", "ts"]);
        assert!(!settings.fail_on_write_error);
    }

    #[test]
    fn resolves_paths_against_config_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("propdoc.toml");
        fs::write(
            &path,
            r#"
[paths]
components = "lib/components"
output = "/tmp/componentData.js"

[extract]
extensions = ["jsx"]

[output]
fail_on_write_error = true
"#,
        )
        .unwrap();

        let settings = load_config(&path).unwrap();

        assert_eq!(settings.catalog.components_dir, temp.path().join("lib/components"));
        assert_eq!(settings.catalog.examples_dir, temp.path().join("src/docs/examples"));
        assert_eq!(settings.catalog.output_path, PathBuf::from("/tmp/componentData.js"));
        assert_eq!(settings.catalog.extensions, vec!["jsx"]);
        assert!(settings.fail_on_write_error);
    }

    #[test]
    fn rejects_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("propdoc.toml");
        fs::write(&path, "[paths\ncomponents = 1").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("propdoc.toml");
        fs::write(&path, "[paths]\ncomponent = \"src\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn rejects_empty_extension_list() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("propdoc.toml");
        fs::write(&path, "[extract]\nextensions = []\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
