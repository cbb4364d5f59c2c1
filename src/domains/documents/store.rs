//! Document store - resolves and reads the served documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::DocumentError;
use super::info::{DocumentInfo, SCHEMA_DOCUMENT, WORKFLOW_DOCUMENT};
use crate::core::config::DocumentsConfig;

/// Reads the workflow and schema documents from under a working root.
///
/// Holds paths only; every read opens the file, reads it fully and closes
/// it before returning.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
    workflow_path: String,
    schema_path: String,
}

impl DocumentStore {
    /// Create a store from the documents configuration.
    pub fn new(config: &DocumentsConfig) -> Self {
        Self {
            root: config.root.clone(),
            workflow_path: config.workflow_path.clone(),
            schema_path: config.schema_path.clone(),
        }
    }

    /// The working root document paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configured workflow document path, as shown to agents.
    pub fn workflow_path(&self) -> &str {
        &self.workflow_path
    }

    /// The configured schema document path, as shown to agents.
    pub fn schema_path(&self) -> &str {
        &self.schema_path
    }

    /// Read the workflow instructions verbatim.
    pub fn read_workflow(&self) -> Result<String, DocumentError> {
        self.read_text(WORKFLOW_DOCUMENT, &self.workflow_path)
    }

    /// Read the Swagger definition and return it re-serialized with
    /// two-space indentation.
    ///
    /// Key order and number literals follow the source file. Syntax errors are reported as
    /// [`DocumentError::Malformed`] with the parser's line and column.
    pub fn read_schema(&self) -> Result<String, DocumentError> {
        let raw = self.read_text(SCHEMA_DOCUMENT, &self.schema_path)?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| self.malformed(source))?;

        serde_json::to_string_pretty(&value).map_err(|source| self.malformed(source))
    }

    fn malformed(&self, source: serde_json::Error) -> DocumentError {
        DocumentError::Malformed {
            document: SCHEMA_DOCUMENT,
            path: self.schema_path.clone(),
            source,
        }
    }

    fn read_text(&self, document: DocumentInfo, path: &str) -> Result<String, DocumentError> {
        let full_path = self.root.join(path);
        debug!("Reading {} from {:?}", document, full_path);

        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DocumentError::NotFound {
                document,
                path: path.to_string(),
            },
            _ => DocumentError::Unreadable {
                document,
                path: path.to_string(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DEFAULT_SCHEMA_PATH, DEFAULT_WORKFLOW_PATH};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(&DocumentsConfig {
            root: dir.path().to_path_buf(),
            ..DocumentsConfig::default()
        })
    }

    fn write_document(dir: &TempDir, relative: &str, contents: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_workflow_returned_verbatim() {
        let dir = TempDir::new().unwrap();
        let body = "# Steps\n\n1. Generate\r\n2.  Review\t\n";
        write_document(&dir, DEFAULT_WORKFLOW_PATH, body);

        let content = store_in(&dir).read_workflow().unwrap();
        assert_eq!(content, body);
    }

    #[test]
    fn test_workflow_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).read_workflow().unwrap_err();

        assert!(matches!(err, DocumentError::NotFound { .. }));
        assert!(err.to_guidance().contains(DEFAULT_WORKFLOW_PATH));
    }

    #[test]
    fn test_workflow_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(DEFAULT_WORKFLOW_PATH)).unwrap();

        let err = store_in(&dir).read_workflow().unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { .. }));
    }

    #[test]
    fn test_workflow_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_WORKFLOW_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = store_in(&dir).read_workflow().unwrap_err();
        assert_eq!(err.kind(), "resource_unreadable");
    }

    #[test]
    fn test_schema_reindented_with_two_spaces() {
        let dir = TempDir::new().unwrap();
        write_document(
            &dir,
            DEFAULT_SCHEMA_PATH,
            r#"{"swagger":"2.0",   "paths": {"/items": {"get": {}}},
"tags":[1,2]}"#,
        );

        let content = store_in(&dir).read_schema().unwrap();
        let expected = r#"{
  "swagger": "2.0",
  "paths": {
    "/items": {
      "get": {}
    }
  },
  "tags": [
    1,
    2
  ]
}"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn test_schema_round_trip_preserves_value() {
        let dir = TempDir::new().unwrap();
        let source = r#"{"info":{"title":"Fabric","version":"v1"},"definitions":{"Item":{"type":"object","required":["id"],"properties":{"id":{"type":"string","format":"uuid"},"size":{"type":"number","example":1.5},"nullable":null,"flag":true}}},"list":[[],{},"é"]}"#;
        write_document(&dir, DEFAULT_SCHEMA_PATH, source);

        let content = store_in(&dir).read_schema().unwrap();
        let original: serde_json::Value = serde_json::from_str(source).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_schema_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        write_document(&dir, DEFAULT_SCHEMA_PATH, r#"{"zeta": 1, "alpha": 2}"#);

        let content = store_in(&dir).read_schema().unwrap();
        let zeta = content.find("zeta").unwrap();
        let alpha = content.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_schema_numbers_kept_exactly() {
        let dir = TempDir::new().unwrap();
        write_document(
            &dir,
            DEFAULT_SCHEMA_PATH,
            r#"{"maximum": 18446744073709551616, "minimum": -9223372036854775809, "ratio": 0.1000000000000000055511151231257827}"#,
        );

        let content = store_in(&dir).read_schema().unwrap();
        assert!(content.contains("\"maximum\": 18446744073709551616"));
        assert!(content.contains("\"minimum\": -9223372036854775809"));
        assert!(content.contains("\"ratio\": 0.1000000000000000055511151231257827"));
    }

    #[test]
    fn test_schema_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(DEFAULT_SCHEMA_PATH)).unwrap();

        let err = store_in(&dir).read_schema().unwrap_err();
        assert_eq!(err.kind(), "resource_unreadable");
        assert!(err
            .to_guidance()
            .starts_with("# Error: Could not read swagger definition file"));
    }

    #[test]
    fn test_schema_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_SCHEMA_PATH);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = store_in(&dir).read_schema().unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { .. }));
        assert!(err
            .to_guidance()
            .starts_with("# Error: Could not read swagger definition file"));
    }

    #[test]
    fn test_schema_truncated_is_malformed() {
        let dir = TempDir::new().unwrap();
        write_document(&dir, DEFAULT_SCHEMA_PATH, r#"{"swagger": "2.0", "paths": {"#);

        let err = store_in(&dir).read_schema().unwrap_err();
        assert!(matches!(err, DocumentError::Malformed { .. }));

        let text = err.to_guidance();
        assert!(text.contains("EOF while parsing"));
        assert!(text.contains("line 1"));
    }

    #[test]
    fn test_schema_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).read_schema().unwrap_err();

        assert_eq!(err.kind(), "resource_not_found");
        assert!(err.to_guidance().contains(DEFAULT_SCHEMA_PATH));
    }

    #[test]
    fn test_custom_paths_are_reported() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(&DocumentsConfig {
            root: dir.path().to_path_buf(),
            workflow_path: "docs/flow.md".to_string(),
            schema_path: "docs/api.json".to_string(),
        });

        assert_eq!(store.workflow_path(), "docs/flow.md");
        assert_eq!(store.schema_path(), "docs/api.json");
        assert_eq!(store.root(), dir.path());
        assert!(store
            .read_workflow()
            .unwrap_err()
            .to_guidance()
            .contains("docs/flow.md"));
    }
}
