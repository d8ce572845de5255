//! LabArchive Common Library
//!
//! Shared code for the LabArchive binaries including:
//! - Database models and repository
//! - Error types and handling
//! - Configuration management
//! - Authentication utilities (JWT, password hashing)
//! - Metrics registration

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default role assigned to newly created users
pub const DEFAULT_USER_ROLE: &str = "USER";

/// Role required by admin-only routes
pub const ADMIN_ROLE: &str = "ADMIN";
