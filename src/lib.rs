//! gqldocs library interface
//!
//! This crate introspects a live GraphQL endpoint and synthesizes
//! human-readable API documentation: operation listings, sample queries,
//! example variables, example responses, and ready-to-run client snippets.
//!
//! # Module Organization
//!
//! - [`client`] - Introspection HTTP client
//! - [`schema`] - Introspection document and normalized schema model
//! - [`describe`] - Naming-convention description heuristics
//! - [`synth`] - Sample query/response/snippet synthesis
//! - [`docs`] - Request-scoped documentation context
//! - [`errors`] - Error types (GqldocsError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod client;
pub mod describe;
pub mod docs;
pub mod errors;
pub mod schema;
pub mod status;
pub mod synth;
