//! Document service — use-cases for recording and listing documents.

use restshim_domain::document::Document;

use crate::ports::DocumentStore;

/// Application service over a [`DocumentStore`].
pub struct DocumentService<S> {
    store: S,
}

impl<S: DocumentStore> DocumentService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a document at the end of the list.
    pub fn record_document(&self, document: Document) {
        tracing::debug!(document_id = %document.document_id, "recording document");
        self.store.append(document);
    }

    /// List every recorded document in insertion order.
    #[must_use]
    pub fn list_documents(&self) -> Vec<Document> {
        self.store.list()
    }
}
