//! Storage layer for AppSession
//!
//! This crate implements the in-memory session store with:
//! - Session: case-insensitive map of scalars and groups behind one RwLock
//! - Group / Entry: scalar-or-group tagging in a shared namespace
//! - AuditRecord: insertion log backing diagnostic dumps
//! - SessionConfig / SessionBuilder: construction settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod config;
pub mod group;
pub mod session;

pub use audit::AuditRecord;
pub use config::{SessionBuilder, SessionConfig};
pub use group::{Entry, Group, GROUP_TYPE_NAME};
pub use session::Session;
