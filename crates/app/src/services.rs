//! Application services — use-case orchestration.

pub mod document_service;
