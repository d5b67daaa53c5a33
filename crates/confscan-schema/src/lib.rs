//! # confscan-schema — Schema Validation
//!
//! Validates config documents loaded by `confscan-core` against a JSON
//! Schema.
//!
//! ## Runtime Validation (`validate`)
//!
//! [`SchemaValidator`] compiles a schema once, from a file or an in-memory
//! value, and checks any number of documents against it. The draft is
//! picked from the schema's `$schema` keyword. `$ref`s to sibling files are
//! resolved from the schema's own directory; nothing is fetched over the
//! network.
//!
//! [`check_valid_schema`] is the one-shot form: a document that does not
//! satisfy the schema yields `Ok(false)`, while a schema that cannot be
//! compiled is an error.
//!
//! ## Verdicts (`verdict`)
//!
//! [`validate_documents`] runs a validator over a whole scan and returns one
//! [`DocumentVerdict`] per document, in scan order.

pub mod validate;
pub mod verdict;

pub use validate::{
    check_valid_schema, SchemaValidationError, SchemaValidator, ValidationViolations, Violation,
};
pub use verdict::{validate_documents, DocumentVerdict};
