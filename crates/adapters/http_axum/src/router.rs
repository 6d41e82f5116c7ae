//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use restshim_app::ports::DocumentStore;
use restshim_app::services::document_service::DocumentService;

use crate::registrar::{Registrar, RegistrationError};
use crate::resources::{ContentsWriteResource, HelloResource};

/// Build the top-level axum [`Router`] serving the demo resources.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
///
/// # Errors
///
/// Returns a [`RegistrationError`] if two resources claim the same URI.
pub fn build<S>(documents: Arc<DocumentService<S>>) -> Result<Router, RegistrationError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let router = Registrar::new()
        .register(HelloResource)?
        .register(ContentsWriteResource::new(documents))?
        .into_router();

    Ok(router.layer(TraceLayer::new_for_http()))
}
