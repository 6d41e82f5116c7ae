//! Resource capability interface and the not-supported providers.
//!
//! A [`Resource`] always exposes all four verbs. Verbs a resource does not
//! implement fall through to the matching provider ([`GetNotSupported`],
//! [`PostNotSupported`], [`PutNotSupported`], [`DeleteNotSupported`]), which
//! answers with the constant `405` envelope. No resource writes its own
//! rejection logic.

use axum::routing::MethodFilter;
use serde::Serialize;

use restshim_domain::envelope::Envelope;

use crate::request::ResourceRequest;

/// A URI-addressed set of verb handlers.
///
/// Methods never fail: every outcome, including rejected input and
/// unsupported verbs, is an [`Envelope`]. The registrar shares the resource
/// across concurrent requests, hence the `Send + Sync` bound.
pub trait Resource: Send + Sync + 'static {
    /// Payload type carried in the envelopes this resource returns.
    type Data: Serialize + Send + 'static;

    /// Route the resource is bound to. Must stay constant.
    fn uri(&self) -> &str;

    /// Handle `GET`. Defaults to the constant `405` envelope.
    fn get(&self, request: &ResourceRequest) -> Envelope<Self::Data> {
        GetNotSupported.get(request)
    }

    /// Handle `POST`. Defaults to the constant `405` envelope.
    fn post(&self, request: &ResourceRequest) -> Envelope<Self::Data> {
        PostNotSupported.post(request)
    }

    /// Handle `PUT`. Defaults to the constant `405` envelope.
    fn put(&self, request: &ResourceRequest) -> Envelope<Self::Data> {
        PutNotSupported.put(request)
    }

    /// Handle `DELETE`. Defaults to the constant `405` envelope.
    fn delete(&self, request: &ResourceRequest) -> Envelope<Self::Data> {
        DeleteNotSupported.delete(request)
    }
}

/// Stand-in for a resource without a GET handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetNotSupported;

impl GetNotSupported {
    #[must_use]
    pub fn get<T>(self, _request: &ResourceRequest) -> Envelope<T> {
        Envelope::method_not_allowed()
    }
}

/// Stand-in for a resource without a POST handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostNotSupported;

impl PostNotSupported {
    #[must_use]
    pub fn post<T>(self, _request: &ResourceRequest) -> Envelope<T> {
        Envelope::method_not_allowed()
    }
}

/// Stand-in for a resource without a PUT handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PutNotSupported;

impl PutNotSupported {
    #[must_use]
    pub fn put<T>(self, _request: &ResourceRequest) -> Envelope<T> {
        Envelope::method_not_allowed()
    }
}

/// Stand-in for a resource without a DELETE handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteNotSupported;

impl DeleteNotSupported {
    #[must_use]
    pub fn delete<T>(self, _request: &ResourceRequest) -> Envelope<T> {
        Envelope::method_not_allowed()
    }
}

/// The four verbs every resource answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Every verb, in registration order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Router filter matching this verb.
    #[must_use]
    pub fn filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Delete => MethodFilter::DELETE,
        }
    }

    /// Call the method of `resource` matching this verb.
    pub fn dispatch<R: Resource + ?Sized>(
        self,
        resource: &R,
        request: &ResourceRequest,
    ) -> Envelope<R::Data> {
        match self {
            Self::Get => resource.get(request),
            Self::Post => resource.post(request),
            Self::Put => resource.put(request),
            Self::Delete => resource.delete(request),
        }
    }
}
