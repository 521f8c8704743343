//! Documentation sample synthesis
//!
//! Pure functions over the normalized [`SchemaModel`](crate::schema::SchemaModel):
//! sample query/mutation text with example variables, example response
//! payloads, and ready-to-run client snippets. Synthesis never fails: an
//! unresolvable type degrades to a lower-fidelity sample, never an error.

pub mod query;
pub mod response;
pub mod snippets;

pub use query::{build_sample_operation, SampleOperation, DEFAULT_MAX_DEPTH};
pub use response::build_sample_response;
pub use snippets::{generate_snippets, ClientSnippets};
