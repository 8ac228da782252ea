//! File-backed persistence for the near-miss reporting tool.
//!
//! Two stores live here: [`cache::LocalCache`], the client's authoritative
//! local store, and [`document::DocumentStore`], the flat JSON document the
//! persistence service reads and rewrites on every request.

pub mod cache;
pub mod document;
pub mod error;

pub use cache::LocalCache;
pub use document::{DocumentStore, ReportDocument};
pub use error::StoreError;
