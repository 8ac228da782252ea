use std::sync::Arc;

use nearmiss_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc`. Note that the document
/// store itself performs an unsynchronized read-modify-write per request
/// (see [`DocumentStore`]); the `Arc` shares the handle, not a lock.
#[derive(Clone)]
pub struct AppState {
    /// Flat JSON document store holding the report collection.
    pub store: Arc<DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
