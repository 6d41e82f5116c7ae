//! # restshim-domain
//!
//! Pure domain model for the restshim resource-dispatch service.
//!
//! ## Responsibilities
//! - Define the **Envelope** (`{code, message, data}`) every resource returns
//! - Define **Documents**, the records listed by the demo document resource
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Status codes are plain `u16` values here; the HTTP adapter maps them onto
//! its own status type.

pub mod document;
pub mod envelope;
