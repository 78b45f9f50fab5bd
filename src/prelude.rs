//! Convenient imports for AppSession.
//!
//! ```
//! use appsession::prelude::*;
//!
//! let session = Session::new();
//! session.set("key", 1i32);
//! assert_eq!(session.get_as::<i32>("KEY"), Some(1));
//! ```

// Entry points
pub use crate::app_session::AppSession;
pub use crate::Session;

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::types::{AuditRecord, Entry, Group, Key, SessionBuilder, SessionConfig, Value};
