//! Process-wide session entry point.
//!
//! [`AppSession`] is a zero-sized facade over one lazily created [`Session`]
//! that lives for the rest of the process. Every associated function
//! delegates to that instance, so any part of a program can share values
//! without threading a handle through its call graph.
//!
//! # Example
//!
//! ```
//! use appsession::AppSession;
//!
//! AppSession::set("fruit", "Apple".to_string());
//! AppSession::set("fruit", "Orange".to_string());
//!
//! assert_eq!(AppSession::get_as::<String>("FRUIT").as_deref(), Some("Orange"));
//! # AppSession::clear();
//! ```
//!
//! Code that wants an isolated store (tests, scoped work) should construct
//! its own [`Session`] instead.

use crate::types::{AuditRecord, Entry, Group, Value};
use appsession_core::Result;
use appsession_storage::Session;
use once_cell::sync::Lazy;
use std::any::Any;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::io::{self, Write};

static SHARED: Lazy<Session> = Lazy::new(|| {
    tracing::debug!("initializing process-wide session");
    Session::new()
});

/// Static access to the process-wide session.
pub struct AppSession;

impl AppSession {
    /// The process-wide session, created on first use.
    pub fn shared() -> &'static Session {
        &SHARED
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Store `value` under `key`. See [`Session::set`].
    pub fn set<T: Any + Send + Sync>(key: &str, value: T) {
        SHARED.set(key, value);
    }

    /// Store `value` as member `key` of `group`. See [`Session::set_in`].
    pub fn set_in<T: Any + Send + Sync>(group: &str, key: &str, value: T) {
        SHARED.set_in(group, key, value);
    }

    /// Store `value` and keep its rendering for dumps. See [`Session::set_debug`].
    pub fn set_debug<T: Any + Send + Sync + Debug>(key: &str, value: T) {
        SHARED.set_debug(key, value);
    }

    /// Grouped form of [`AppSession::set_debug`].
    pub fn set_in_debug<T: Any + Send + Sync + Debug>(group: &str, key: &str, value: T) {
        SHARED.set_in_debug(group, key, value);
    }

    /// Store a wrapped value with an optional group. See [`Session::put`].
    pub fn put(key: &str, value: Value, group: Option<&str>) {
        SHARED.put(key, value, group);
    }

    /// Delete a key or a whole group.
    pub fn delete(key: &str) -> bool {
        SHARED.delete(key)
    }

    /// Remove every entry, group name and audit record.
    pub fn clear() {
        SHARED.clear();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the entry under `key`.
    pub fn get(key: &str) -> Option<Entry> {
        SHARED.get(key)
    }

    /// Get a scalar as `T`.
    pub fn get_as<T: Any + Clone>(key: &str) -> Option<T> {
        SHARED.get_as(key)
    }

    /// Get a scalar as `T`, with the reason on failure.
    pub fn try_get<T: Any + Clone>(key: &str) -> Result<T> {
        SHARED.try_get(key)
    }

    /// Get a group by name.
    pub fn get_group(key: &str) -> Option<Group> {
        SHARED.get_group(key)
    }

    /// Get and delete in one step.
    pub fn pop(key: &str) -> Option<Entry> {
        SHARED.pop(key)
    }

    /// Pop a scalar as `T`.
    pub fn pop_as<T: Any + Clone>(key: &str) -> Option<T> {
        SHARED.pop_as(key)
    }

    /// Check if `key` is a top-level entry.
    pub fn contains(key: &str) -> bool {
        SHARED.contains(key)
    }

    /// Number of top-level entries.
    pub fn count() -> usize {
        SHARED.count()
    }

    /// All top-level keys.
    pub fn keys() -> BTreeSet<String> {
        SHARED.keys()
    }

    /// Keys that name a group.
    pub fn groups() -> BTreeSet<String> {
        SHARED.groups()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Snapshot of the audit log.
    pub fn records() -> Vec<AuditRecord> {
        SHARED.records()
    }

    /// Print a diagnostic dump to stdout.
    pub fn info() {
        SHARED.info();
    }

    /// Write the diagnostic dump to `out`.
    pub fn info_to<W: Write>(out: &mut W) -> io::Result<()> {
        SHARED.info_to(out)
    }
}
