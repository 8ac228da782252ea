//! Client-side report store with best-effort server synchronization.
//!
//! [`store::ReportStore`] owns the in-memory collection, persists every
//! mutation to the local cache before anything else happens, and then
//! mirrors the mutation to the persistence service. The mirror is strictly
//! best-effort: any remote failure is logged and absorbed, so the client
//! remains fully usable offline. The two stores may diverge over time;
//! there is no reconciliation pass.

pub mod mirror;
pub mod store;

pub use mirror::{MirrorError, RemoteMirror};
pub use store::{ReportStore, StoreEvent};
