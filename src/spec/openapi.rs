//! OpenAPI document layer: deserialization + (path, method) lookup.
//!
//! The document must already be fully dereferenced; `$ref` indirection is
//! resolved upstream and never handled here. Consumed shape:
//!
//! {
//!   "info": { "title": "...", "version": "..." },
//!   "paths": {
//!     "/users": {
//!       "get": { "summary": "...", "description": "...", ... }
//!     }
//!   }
//! }
//!
//! Only HTTP-method keys of a path item are kept; everything else
//! (`parameters`, vendor extensions, ...) is dropped at build time. Lookup
//! is case-sensitive on the path and expects an already-lowercased method.

use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Raw document shape as deserialized from JSON or YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecDocument {
    #[serde(default)]
    pub info: SpecInfo,

    #[serde(default)]
    pub paths: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecInfo {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,
}

/// Subset of an operation object consumed by the renderer. Other fields are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// Operations of one path, keyed by lowercase HTTP method.
pub type PathOperations = BTreeMap<String, OperationDescriptor>;

/// Validated, read-only spec tree. Built once at startup and shared for the
/// rest of the run; nothing in the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct ResolvedSpec {
    pub info: SpecInfo,
    pub paths: BTreeMap<String, PathOperations>,
}

impl SpecDocument {
    /// Keep the method entries of every path item, discarding non-operation
    /// keys, and reject documents without any paths.
    pub fn validate_and_build(&self) -> anyhow::Result<ResolvedSpec> {
        let mut paths: BTreeMap<String, PathOperations> = BTreeMap::new();

        for (path, item) in &self.paths {
            let mut operations = PathOperations::new();
            for (key, value) in item {
                let method = key.to_ascii_lowercase();
                if !HTTP_METHODS.contains(&method.as_str()) {
                    continue;
                }
                let op: OperationDescriptor = serde_json::from_value(value.clone())
                    .with_context(|| format!("invalid operation object at {method} {path}"))?;
                operations.insert(method, op);
            }
            paths.insert(path.clone(), operations);
        }

        if paths.is_empty() {
            bail!("OpenAPI document contained no paths");
        }

        Ok(ResolvedSpec {
            info: self.info.clone(),
            paths,
        })
    }
}

impl ResolvedSpec {
    /// Load and validate an OpenAPI document from disk. `.yaml`/`.yml` files
    /// are parsed as YAML, everything else as JSON. Any failure here is
    /// fatal: it happens once at startup, before any document is processed.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read OpenAPI document {}", path))?;

        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let doc: SpecDocument = if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
        {
            serde_yaml::from_str(&text)
                .with_context(|| format!("parse OpenAPI YAML document {}", path))?
        } else {
            serde_json::from_str(&text)
                .with_context(|| format!("parse OpenAPI JSON document {}", path))?
        };

        let spec = doc.validate_and_build()?;

        info!("API title: {}", spec.info.title);
        info!("API version: {}", spec.info.version);
        info!("available paths: {}", spec.paths.len());

        Ok(spec)
    }

    /// Look up one operation. The method must already be lowercased by the
    /// caller; the path is matched case-sensitively.
    pub fn lookup(&self, path: &str, method: &str) -> Option<&OperationDescriptor> {
        self.paths.get(path)?.get(method)
    }

    /// First operation of a path in method-name order, for directives that
    /// omit `http_method`.
    pub fn any_operation(&self, path: &str) -> Option<&OperationDescriptor> {
        self.paths.get(path)?.values().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn users_spec_json() -> &'static str {
        r#"{
            "info": { "title": "Demo API", "version": "1.2.3" },
            "paths": {
                "/users": {
                    "get": { "summary": "List users", "description": "Returns all users." },
                    "post": { "summary": "Create user", "description": "Creates one user." },
                    "parameters": [ { "name": "page", "in": "query" } ]
                }
            }
        }"#
    }

    fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_json_and_lookup() {
        let file = write_temp(users_spec_json(), ".json");
        let spec = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(spec.info.title, "Demo API");
        assert_eq!(spec.info.version, "1.2.3");

        let op = spec.lookup("/users", "get").unwrap();
        assert_eq!(op.summary.as_deref(), Some("List users"));
        assert_eq!(op.description.as_deref(), Some("Returns all users."));
    }

    #[test]
    fn load_yaml_by_extension() {
        let yaml = "info:\n  title: Demo API\n  version: 1.2.3\npaths:\n  /users:\n    get:\n      summary: List users\n      description: Returns all users.\n";
        let file = write_temp(yaml, ".yaml");
        let spec = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            spec.lookup("/users", "get").unwrap().summary.as_deref(),
            Some("List users")
        );
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = ResolvedSpec::load("/nonexistent/openapi.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/openapi.json"));
    }

    #[test]
    fn document_without_paths_is_rejected() {
        let file = write_temp(r#"{ "info": { "title": "Empty" } }"#, ".json");
        let err = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("no paths"));
    }

    #[test]
    fn lookup_is_case_sensitive_on_path() {
        let file = write_temp(users_spec_json(), ".json");
        let spec = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(spec.lookup("/Users", "get"), None);
    }

    #[test]
    fn non_operation_path_item_keys_are_dropped() {
        let file = write_temp(users_spec_json(), ".json");
        let spec = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(spec.paths["/users"].len(), 2);
        assert_eq!(spec.lookup("/users", "parameters"), None);
    }

    #[test]
    fn any_operation_picks_first_in_method_order() {
        let file = write_temp(users_spec_json(), ".json");
        let spec = ResolvedSpec::load(file.path().to_str().unwrap()).unwrap();
        // "get" sorts before "post".
        assert_eq!(
            spec.any_operation("/users").unwrap().summary.as_deref(),
            Some("List users")
        );
        assert_eq!(spec.any_operation("/missing"), None);
    }
}
