//! Per-document schema outcomes for a whole folder scan.

use confscan_core::ParsedDocument;
use serde::Serialize;

use crate::validate::{SchemaValidator, Violation};

/// Whether one loaded document satisfied the schema, and why not if it didn't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentVerdict {
    /// Entry name of the document.
    pub document: String,
    /// Empty when the document passed.
    pub violations: Vec<Violation>,
}

impl DocumentVerdict {
    /// True when the document has no violations.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate every document, keeping scan order.
pub fn validate_documents(
    validator: &SchemaValidator,
    documents: &[ParsedDocument],
) -> Vec<DocumentVerdict> {
    documents
        .iter()
        .map(|doc| {
            let violations = validator.violations(&doc.value).into_inner();
            if violations.is_empty() {
                tracing::debug!(
                    document = %doc.name,
                    schema = validator.schema_name(),
                    "schema check passed"
                );
            } else {
                tracing::info!(
                    document = %doc.name,
                    schema = validator.schema_name(),
                    violations = violations.len(),
                    "schema check failed"
                );
            }
            DocumentVerdict {
                document: doc.name.clone(),
                violations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verdicts_follow_document_order() {
        let validator =
            SchemaValidator::from_value("array", &json!({"type": "array"})).unwrap();
        let docs = vec![
            ParsedDocument::new("a.json", json!({"x": 1})),
            ParsedDocument::new("c.json", json!([1, 2, 3])),
        ];
        let verdicts = validate_documents(&validator, &docs);

        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].document, "a.json");
        assert!(!verdicts[0].passed());
        assert_eq!(verdicts[1].document, "c.json");
        assert!(verdicts[1].passed());
    }

    #[test]
    fn verdict_serializes_with_violations() {
        let validator =
            SchemaValidator::from_value("array", &json!({"type": "array"})).unwrap();
        let docs = vec![ParsedDocument::new("a.json", json!(1))];
        let verdicts = validate_documents(&validator, &docs);
        let value = serde_json::to_value(&verdicts[0]).unwrap();

        assert_eq!(value["document"], "a.json");
        assert_eq!(value["violations"][0]["instance_path"], "");
        assert!(value["violations"][0]["message"].is_string());
    }

    #[test]
    fn no_documents_no_verdicts() {
        let validator = SchemaValidator::from_value("any", &json!({})).unwrap();
        assert!(validate_documents(&validator, &[]).is_empty());
    }
}
