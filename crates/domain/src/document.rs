//! Document — a written record listed by the document resource.

use serde::{Deserialize, Serialize};

/// A recorded document. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_name: String,
    pub document_id: String,
    pub writer: String,
}

impl Document {
    /// Create a document from its three fields.
    #[must_use]
    pub fn new(
        document_name: impl Into<String>,
        document_id: impl Into<String>,
        writer: impl Into<String>,
    ) -> Self {
        Self {
            document_name: document_name.into(),
            document_id: document_id.into(),
            writer: writer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let doc = Document::new("Notes", "doc-1", "alice");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "documentName": "Notes",
                "documentId": "doc-1",
                "writer": "alice",
            })
        );
    }

    #[test]
    fn should_reject_snake_case_keys() {
        let result: Result<Document, _> = serde_json::from_str(
            r#"{"document_name":"Notes","document_id":"doc-1","writer":"alice"}"#,
        );
        assert!(result.is_err());
    }
}
