//! LabArchive HTTP API library
//!
//! Exposes the router and application state so the binary and the
//! integration tests share one wiring path.

pub mod handlers;
pub mod middleware;
mod router;

pub use router::{create_router, AppState};
