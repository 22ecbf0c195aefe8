//! Custom extractors for Axum handlers.
//!
//! Each one rejects malformed input with a Fail envelope instead of axum's
//! plain-text rejection.

pub mod envelope_json;
pub mod envelope_query;
pub mod id_path;

pub use envelope_json::EnvelopeJson;
pub use envelope_query::EnvelopeQuery;
pub use id_path::IdPath;
