//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed document accessor shared by the
//! services that persist whole JSON documents.

pub mod json_doc_store;
