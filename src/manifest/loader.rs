//! Loading manifests from strings and files.

use super::value::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// LoadError is returned when a manifest cannot be read or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },
}

/// The serialization format of a manifest document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Manifest is a parsed dependency file.
///
/// It is an opaque tree; only the top-level section fields are ever read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// A manifest with no fields at all.
    pub fn empty() -> Self {
        Manifest {
            root: Value::Map(Map::new()),
        }
    }

    pub fn from_value(root: Value) -> Self {
        Manifest { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns the top-level field `name`, if the root is a map and has it.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.root.as_map().and_then(|m| m.get(name))
    }
}

/// Parses a manifest from JSON text.
pub fn from_json(json: &str) -> Result<Manifest, LoadError> {
    parse(json, Format::Json, "JSON input")
}

/// Parses a manifest from YAML text.
pub fn from_yaml(yaml: &str) -> Result<Manifest, LoadError> {
    parse(yaml, Format::Yaml, "YAML input")
}

/// Reads and parses the manifest at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Manifest, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = Format::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading manifest");
    parse(&content, format, &path.display().to_string())
}

fn parse(content: &str, format: Format, origin: &str) -> Result<Manifest, LoadError> {
    let root: Value = match format {
        Format::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
    }
    .map_err(|message| LoadError::Parse {
        origin: origin.to_string(),
        message,
    })?;
    Ok(Manifest::from_value(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{resolve, Section, SectionSelector};
    use std::io::Write;

    #[test]
    fn test_from_json() {
        let manifest = from_json(r#"{"name": "app", "dependencies": {"a": "1.0.0"}}"#).unwrap();
        assert!(manifest.section("dependencies").unwrap().is_map());
        assert!(manifest.section("devDependencies").is_none());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = from_json("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_non_map_root_has_no_sections() {
        let manifest = from_json("[1, 2, 3]").unwrap();
        assert!(manifest.section("dependencies").is_none());
    }

    #[test]
    fn test_from_yaml_with_numeric_keys_elsewhere() {
        let manifest = from_yaml("dependencies:\n  a: \"1.0.0\"\nports:\n  8080: web\n").unwrap();
        let resolved = resolve(&manifest, SectionSelector::Runtime);
        assert_eq!(resolved.get(Section::Runtime).unwrap().get("a"), Some("1.0.0"));

        let ports = manifest.section("ports").and_then(Value::as_map).unwrap();
        assert_eq!(ports.get("8080").and_then(Value::as_str), Some("web"));
    }

    #[test]
    fn test_from_yaml_numeric_package_name_parses() {
        let manifest = from_yaml("dependencies:\n  1: x\n").unwrap();
        assert!(manifest.section("dependencies").unwrap().is_map());

        let resolved = resolve(&manifest, SectionSelector::Runtime);
        assert!(resolved.get(Section::Runtime).unwrap().is_empty());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("package.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("deps.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("deps.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("package")), Format::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("package.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().starts_with("file not found:"));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "devDependencies:\n  jest: ^30.0.0").unwrap();

        let manifest = load(file.path()).unwrap();
        let dev = manifest.section("devDependencies").unwrap();
        assert_eq!(
            dev.as_map().unwrap().get("jest").and_then(Value::as_str),
            Some("^30.0.0")
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"dependencies\": ").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
