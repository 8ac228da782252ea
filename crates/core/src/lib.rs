//! Domain logic for the near-miss reporting tool.
//!
//! Holds the report entity model, the pure filter/query engine, and the
//! import/export codec. This crate performs no I/O and has no internal
//! dependencies, so every other crate (store, client, api) can build on it.

pub mod codec;
pub mod error;
pub mod filter;
pub mod model;

pub use error::CoreError;
pub use filter::{visible, FilterCriteria};
pub use model::{Category, Report, ReportCollection, ReportDraft, RiskLevel};
