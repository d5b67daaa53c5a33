//! # Schema Validation
//!
//! Runtime validation of config documents against a JSON Schema.
//!
//! ## Failure Modes
//!
//! Two kinds of failure are kept apart:
//!
//! - A document that does not satisfy the schema. This is an ordinary
//!   outcome: [`SchemaValidator::is_valid`] and [`check_valid_schema`]
//!   report it as `false`, and [`SchemaValidator::validate_document`]
//!   returns [`SchemaValidationError::DocumentRejected`] with one
//!   [`Violation`] per problem.
//! - A schema that cannot be read, parsed, or compiled. This always
//!   propagates as an error.
//!
//! ## Schema Resolution
//!
//! The draft is detected from the schema's `$schema` keyword. Relative
//! cross-file `$ref`s are resolved as paths against the directory the
//! schema was loaded from, so `defs/slot.json` means that subfolder.
//! Anything that cannot be resolved locally is replaced by the permissive
//! schema `{}`, so validation never makes network requests.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Base URI the validator assigns to a root schema without `$id`.
const DEFAULT_BASE_URI: &str = "json-schema:///";

/// Resolves `$ref` URIs to files under the root schema's directory.
struct LocalSchemaRetriever {
    /// Directory of the root schema, if it came from a file.
    schema_dir: Option<PathBuf>,
}

impl LocalSchemaRetriever {
    /// The file a resolved `$ref` URI points at, if it points at one.
    ///
    /// Relative refs arrive already joined onto [`DEFAULT_BASE_URI`], so the
    /// remainder is a path relative to the schema directory, subfolders
    /// included. `file://` URIs are taken literally.
    fn local_path(&self, uri: &str) -> Option<PathBuf> {
        let target = uri.split('#').next().unwrap_or(uri);
        if let Some(path) = target.strip_prefix("file://") {
            return Some(PathBuf::from(path));
        }
        let relative = target.strip_prefix(DEFAULT_BASE_URI)?;
        if relative.is_empty() {
            return None;
        }
        Some(self.schema_dir.as_ref()?.join(relative))
    }
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        if let Some(file) = self.local_path(uri_str).filter(|p| p.is_file()) {
            tracing::debug!(uri = uri_str, file = %file.display(), "resolved $ref locally");
            let content = std::fs::read_to_string(&file)?;
            return Ok(serde_json::from_str(&content)?);
        }

        tracing::warn!(uri = uri_str, "unresolved $ref, substituting permissive schema");
        Ok(serde_json::json!({}))
    }
}

/// Why a schema check could not say "pass".
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// A config document broke one or more schema rules.
    #[error("document rejected by '{schema_name}':\n{violations}")]
    DocumentRejected {
        /// Schema the document was checked against.
        schema_name: String,
        /// Every rule the document broke.
        violations: ValidationViolations,
    },

    /// The schema file is missing, unreadable, or not JSON.
    #[error("cannot load schema '{schema_name}': {reason}")]
    SchemaUnreadable {
        /// Path the schema was read from.
        schema_name: String,
        /// What went wrong.
        reason: String,
    },

    /// The schema parsed as JSON but `jsonschema` refused to compile it.
    #[error("schema '{schema_name}' does not compile: {reason}")]
    SchemaInvalid {
        /// Path or label of the schema.
        schema_name: String,
        /// Compiler message.
        reason: String,
    },
}

/// One rule a config document broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer into the document; empty for the document root.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// The validator's message.
    pub message: String,
}

/// Renders as `<pointer>: <message>`, with `(root)` for the empty pointer.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.instance_path.is_empty() {
            "(root)"
        } else {
            self.instance_path.as_str()
        };
        write!(f, "{at}: {}", self.message)
    }
}

/// All violations found for one document, in validator order.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations(Vec<Violation>);

impl ValidationViolations {
    /// True when the document passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

/// One indented line per violation.
impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

/// A compiled JSON Schema.
///
/// Compilation happens once, in the constructor; every check afterwards
/// reuses the compiled validator.
pub struct SchemaValidator {
    /// File name of the schema, or the label given to [`SchemaValidator::from_value`].
    schema_name: String,
    validator: Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile an in-memory schema.
    ///
    /// `schema_name` only labels errors and reports. Cross-file `$ref`s
    /// cannot be resolved without a directory and become permissive.
    ///
    /// # Errors
    ///
    /// [`SchemaValidationError::SchemaInvalid`] if `schema` is not a
    /// valid JSON Schema.
    pub fn from_value(
        schema_name: impl Into<String>,
        schema: &Value,
    ) -> Result<Self, SchemaValidationError> {
        Self::build(schema_name.into(), schema, None)
    }

    /// Read, parse, and compile the schema at `path`.
    ///
    /// # Errors
    ///
    /// [`SchemaValidationError::SchemaUnreadable`] if the file cannot be read
    /// or is not JSON, [`SchemaValidationError::SchemaInvalid`] if it
    /// does not compile.
    pub fn from_file(path: &Path) -> Result<Self, SchemaValidationError> {
        let schema_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemaValidationError::SchemaUnreadable {
                schema_name: schema_name.clone(),
                reason: format!("cannot read file: {e}"),
            }
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaValidationError::SchemaUnreadable {
                schema_name: schema_name.clone(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;

        let schema_dir = path
            .parent()
            .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
            .map(Path::to_path_buf);
        Self::build(schema_name, &schema, schema_dir)
    }

    fn build(
        schema_name: String,
        schema: &Value,
        schema_dir: Option<PathBuf>,
    ) -> Result<Self, SchemaValidationError> {
        let mut opts = jsonschema::options();
        opts.with_retriever(LocalSchemaRetriever { schema_dir });

        let validator = opts.build(schema).map_err(|e| {
            SchemaValidationError::SchemaInvalid {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(schema = %schema_name, "schema compiled");
        Ok(Self {
            schema_name,
            validator,
        })
    }

    /// Returns the name the schema was loaded under.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Whether `instance` satisfies the schema.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Every way `instance` fails the schema. Empty when it passes.
    pub fn violations(&self, instance: &Value) -> ValidationViolations {
        let violations = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();
        ValidationViolations(violations)
    }

    /// Validate `instance`, returning structured violations on failure.
    ///
    /// # Errors
    ///
    /// [`SchemaValidationError::DocumentRejected`] if the document is invalid.
    pub fn validate_document(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let violations = self.violations(instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::DocumentRejected {
                schema_name: self.schema_name.clone(),
                violations,
            })
        }
    }
}

/// Check one document against one schema.
///
/// Returns `Ok(false)` when `json_data` does not satisfy `schema`.
///
/// # Errors
///
/// Any failure other than the document being invalid, i.e. a schema that
/// does not compile.
pub fn check_valid_schema(
    json_data: &Value,
    schema: &Value,
) -> Result<bool, SchemaValidationError> {
    let validator = SchemaValidator::from_value("inline schema", schema)?;
    Ok(validator.is_valid(json_data))
}
