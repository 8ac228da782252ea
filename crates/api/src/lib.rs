//! Near-miss report persistence service library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! routes) so integration tests and the binary entrypoint share the exact
//! same middleware stack and handlers.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
