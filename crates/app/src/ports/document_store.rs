//! Document store port — owned storage for recorded documents.
//!
//! Methods are synchronous: resource methods run to completion without
//! suspending, so implementations must not block on IO.

use restshim_domain::document::Document;

/// Append-only collection of documents shared between concurrent requests.
///
/// Implementations provide their own synchronization; callers only ever hold
/// `&self`.
pub trait DocumentStore {
    /// Append a document at the end of the collection.
    fn append(&self, document: Document);

    /// Snapshot of every document in insertion order.
    fn list(&self) -> Vec<Document>;
}
