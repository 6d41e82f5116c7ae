//! Resource registration — binds every verb of a [`Resource`] on the router.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use axum::Router;
use axum::routing::MethodRouter;

use crate::encoder::EnvelopeResponse;
use crate::request::ResourceRequest;
use crate::resource::{Resource, Verb};

/// Reasons a resource cannot be registered.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Another resource already matches the same paths at this URI, possibly
    /// under different capture names.
    #[error("resource uri {0:?} conflicts with a registered resource")]
    DuplicateUri(String),
    /// The URI is not a path the router accepts.
    #[error("resource uri {uri:?} is invalid: {reason}")]
    InvalidUri { uri: String, reason: &'static str },
    /// The router refused the route.
    #[error("router rejected resource uri {0:?}")]
    Conflict(String),
}

/// Shape of `uri` as the router sees it: capture names are erased, so
/// `/items/{id}` and `/items/{name}` share a key.
fn route_key(uri: &str) -> Result<String, RegistrationError> {
    let invalid = |reason| RegistrationError::InvalidUri {
        uri: uri.to_owned(),
        reason,
    };

    let Some(path) = uri.strip_prefix('/') else {
        return Err(invalid("must start with '/'"));
    };

    let mut key = String::with_capacity(uri.len());
    for segment in path.split('/') {
        key.push('/');
        if segment.starts_with(':') {
            return Err(invalid("captures are written `{name}`, not `:name`"));
        }
        if segment.starts_with('*') {
            return Err(invalid("wildcards are written `{*name}`, not `*name`"));
        }
        match segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(capture) if capture.starts_with('*') => key.push_str("{*}"),
            Some(capture) if !capture.starts_with('{') => key.push_str("{}"),
            _ => key.push_str(segment),
        }
    }
    Ok(key)
}

/// Builds a [`Router`] out of resources.
///
/// Each registered resource gets GET, POST, PUT and DELETE routes at its URI.
/// Every route calls the resource method for its verb and writes the returned
/// envelope through the encoder. Registration happens once, before serving.
pub struct Registrar<S = ()> {
    router: Router<S>,
    uris: HashSet<String>,
}

impl<S> Default for Registrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Registrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Start from an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::from_router(Router::new())
    }

    /// Start from an existing router.
    ///
    /// Only URIs registered through this registrar are checked for
    /// duplicates; routes already present on `router` are not known to it.
    #[must_use]
    pub fn from_router(router: Router<S>) -> Self {
        Self {
            router,
            uris: HashSet::new(),
        }
    }

    /// Bind the four verbs of `resource` at `resource.uri()`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidUri`] when the URI is not a path
    /// the router accepts, [`RegistrationError::DuplicateUri`] when a resource
    /// already matches the same paths (capture names are ignored), and
    /// [`RegistrationError::Conflict`] when the router still refuses the
    /// route. The registrar is consumed either way.
    pub fn register<R: Resource>(mut self, resource: R) -> Result<Self, RegistrationError> {
        let uri = resource.uri().to_owned();
        let key = route_key(&uri)?;
        if self.uris.contains(&key) {
            return Err(RegistrationError::DuplicateUri(uri));
        }

        let resource = Arc::new(resource);
        let mut route: MethodRouter<S> = MethodRouter::new();
        for verb in Verb::ALL {
            let resource = Arc::clone(&resource);
            route = route.on(verb.filter(), move |request: ResourceRequest| async move {
                EnvelopeResponse(verb.dispatch(resource.as_ref(), &request))
            });
        }

        // axum reports route errors by panicking; keep them as values.
        let router = self.router.clone();
        let path = uri.clone();
        self.router = panic::catch_unwind(AssertUnwindSafe(move || router.route(&path, route)))
            .map_err(|_| RegistrationError::Conflict(uri.clone()))?;
        self.uris.insert(key);

        tracing::info!(uri = %uri, "resource registered");
        Ok(self)
    }

    /// Finish registration and hand back the router.
    #[must_use]
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}
