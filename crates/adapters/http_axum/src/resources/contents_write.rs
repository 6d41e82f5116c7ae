//! `/ContentsWrite` — lists recorded documents and accepts new submissions.

use std::sync::Arc;

use restshim_app::ports::DocumentStore;
use restshim_app::services::document_service::DocumentService;
use restshim_domain::document::Document;
use restshim_domain::envelope::{BAD_REQUEST, Envelope, OK};

use crate::request::ResourceRequest;
use crate::resource::Resource;

/// Form field carrying a submission.
const DATA_FIELD: &str = "data";

/// Document listing and submission resource.
///
/// `GET` returns every document in the injected service. `POST` only checks
/// that the `data` form field is present and non-empty; the submitted value
/// is not parsed and nothing is recorded. `PUT` and `DELETE` are not
/// supported.
pub struct ContentsWriteResource<S> {
    documents: Arc<DocumentService<S>>,
}

impl<S> ContentsWriteResource<S> {
    /// Create the resource over a shared document service.
    pub fn new(documents: Arc<DocumentService<S>>) -> Self {
        Self { documents }
    }
}

impl<S> Resource for ContentsWriteResource<S>
where
    S: DocumentStore + Send + Sync + 'static,
{
    type Data = Vec<Document>;

    fn uri(&self) -> &str {
        "/ContentsWrite"
    }

    fn get(&self, _request: &ResourceRequest) -> Envelope<Self::Data> {
        Envelope::new(OK, "", self.documents.list_documents())
    }

    fn post(&self, request: &ResourceRequest) -> Envelope<Self::Data> {
        match request.form_value(DATA_FIELD) {
            Some(data) if !data.is_empty() => Envelope::empty(OK, "success"),
            _ => Envelope::empty(BAD_REQUEST, "fail"),
        }
    }
}
