//! In-process document store guarded by a read/write lock.

use std::sync::{PoisonError, RwLock};

use restshim_domain::document::Document;

use crate::ports::DocumentStore;

/// In-memory [`DocumentStore`] backed by a `Vec` behind an [`RwLock`].
///
/// Readers take a shared lock and clone a snapshot, so a listing never
/// observes a half-applied append. A poisoned lock is recovered: the vector
/// is only ever pushed to, so its contents stay consistent.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `documents`.
    #[must_use]
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn append(&self, document: Document) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(document);
    }

    fn list(&self) -> Vec<Document> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn should_start_empty() {
        let store = InMemoryDocumentStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn should_list_documents_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        store.append(Document::new("a", "1", "alice"));
        store.append(Document::new("b", "2", "bob"));

        let names: Vec<_> = store
            .list()
            .into_iter()
            .map(|doc| doc.document_name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn should_expose_seeded_documents() {
        let seed = vec![Document::new("seed", "0", "root")];
        let store = InMemoryDocumentStore::with_documents(seed.clone());
        assert_eq!(store.list(), seed);
    }

    #[test]
    fn should_keep_every_append_from_concurrent_writers() {
        let store = Arc::new(InMemoryDocumentStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.append(Document::new(
                            format!("doc-{worker}-{i}"),
                            format!("{worker}-{i}"),
                            "writer",
                        ));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list().len(), 400);
    }

    #[test]
    fn should_share_state_through_arc() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let shared = Arc::clone(&store);
        shared.append(Document::new("a", "1", "alice"));
        assert_eq!(store.list().len(), 1);
    }
}
