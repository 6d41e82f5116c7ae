//! # restshim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DocumentStore` — append & list recorded documents
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DocumentService` — record and list documents
//! - Provide **in-process infrastructure** (lock-guarded document store) that
//!   doesn't need IO
//!
//! ## Dependency rule
//! Depends on `restshim-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod document_store;
pub mod ports;
pub mod services;
