//! # AppSession
//!
//! A process-wide, in-memory key/value session for sharing values of any type
//! across a program without passing them through every call.
//!
//! ## Quick Start
//!
//! ```
//! use appsession::prelude::*;
//!
//! // Plain keys are case-insensitive
//! AppSession::set("User", "taywils".to_string());
//! assert!(AppSession::contains("USER"));
//!
//! // Groups bundle related values under one top-level key
//! AppSession::set_in("order", "main_dish", "Steak".to_string());
//! AppSession::set_in("order", "coupon", 12231u32);
//! let order = AppSession::get_group("order").unwrap();
//! assert_eq!(order.get_as::<u32>("coupon"), Some(12231));
//!
//! // Typed retrieval never panics on a mismatch
//! assert_eq!(AppSession::get_as::<i64>("user"), None);
//! # AppSession::clear();
//! ```
//!
//! ## Namespace
//!
//! Scalars and groups share one namespace. Writing a scalar over a group
//! name deletes the group; writing into a group whose name holds a scalar
//! deletes the scalar. A group counts as one entry.
//!
//! ## Isolation
//!
//! [`AppSession`] always addresses the same process-wide [`Session`].
//! Construct a separate [`Session`] for isolated state.

#![warn(missing_docs)]

mod app_session;
mod types;

pub mod prelude;

// Re-export main entry points
pub use app_session::AppSession;
pub use appsession_storage::Session;
pub use appsession_core::{Error, Result};

// Re-export types
pub use types::*;
