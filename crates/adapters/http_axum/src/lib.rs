//! # restshim-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Define the [`resource::Resource`] capability interface: a URI plus one
//!   method per verb (GET, POST, PUT, DELETE), each returning an
//!   [`Envelope`](restshim_domain::envelope::Envelope)
//! - Provide the not-supported providers that fill in verbs a resource
//!   leaves out with a constant `405` envelope
//! - Bind resources onto an axum [`Router`](axum::Router) through the
//!   [`registrar::Registrar`]
//! - Encode envelopes into JSON responses ([`encoder`])
//!
//! ## Dispatch flow
//! request → axum matches URI and verb → registrar wrapper calls the resource
//! method → envelope → encoder → response.
//!
//! ## Dependency rule
//! Depends on `restshim-app` (for the document service) and `restshim-domain`
//! (for the envelope). Never leaks axum types into the domain.

pub mod encoder;
pub mod registrar;
pub mod request;
pub mod resource;
pub mod resources;
pub mod router;
