//! Core types for AppSession
//!
//! This crate defines the foundational types shared by the store and the
//! process-wide facade:
//! - Value: type-erased stored value with checked retrieval
//! - Key: case-insensitive, normalized key
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod value;

pub use error::{Error, Result};
pub use key::Key;
pub use value::Value;
