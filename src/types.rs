//! Public types for the AppSession API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Stored values and keys
pub use appsession_core::Key;
pub use appsession_core::Value;

// Entries and groups
pub use appsession_storage::{Entry, Group, GROUP_TYPE_NAME};

// Diagnostics
pub use appsession_storage::AuditRecord;

// Configuration
pub use appsession_storage::{SessionBuilder, SessionConfig};
