//! Session store
//!
//! A flat, case-insensitive map from keys to [`Entry`] values, a set of known
//! group names and an ordered audit log.
//!
//! # Namespace rules
//!
//! Scalars and groups share one namespace. Whichever kind is written last
//! under a name wins, and the other kind is purged first:
//!
//! - `set(k, v)` where `k` is a group deletes the whole group
//! - `set_in(g, k, v)` where `g` is a scalar deletes the scalar
//!
//! # Audit log
//!
//! Each accepted write appends a record. Overwriting a scalar replaces the
//! value and keeps its earlier record, so repeated writes show up in dumps.
//! Overwriting a member replaces that member's record. Deleting a scalar
//! drops every record carrying its key, including group members of the
//! same name.
//!
//! # Thread Safety
//!
//! All state sits behind one `RwLock`. Compound operations (`set`, `pop`,
//! `clear`) hold the write guard for their whole duration, so callers never
//! observe a partially applied operation.

use crate::audit::{AuditLog, AuditRecord};
use crate::config::{SessionBuilder, SessionConfig};
use crate::group::{Entry, Group, GROUP_TYPE_NAME};
use appsession_core::{Error, Key, Result, Value};
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use std::any::Any;
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::io::{self, Write};
use tracing::{debug, trace, warn};

/// Unlocked session state
#[derive(Debug)]
struct SessionState {
    storage: FxHashMap<Key, Entry>,
    group_names: FxHashSet<Key>,
    audit: AuditLog,
}

impl SessionState {
    fn new(config: &SessionConfig) -> Self {
        Self {
            storage: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
            group_names: FxHashSet::default(),
            audit: AuditLog::new(config.audit),
        }
    }

    fn put(&mut self, key: Key, value: Value, group: Option<Key>) {
        let type_name = value.type_name();
        match group {
            None => {
                if self.group_names.contains(&key) {
                    debug!(key = %key, "scalar write replaces group");
                    self.delete(&key);
                }
                self.audit.push(
                    AuditRecord::new(key.as_str(), type_name, None).with_value(value.rendered()),
                );
                debug!(key = %key, type_name, "set");
                self.storage.insert(key, Entry::Value(value));
            }
            Some(group) => {
                if !self.group_names.contains(&group) {
                    if self.storage.contains_key(&group) {
                        debug!(group = %group, "group write replaces scalar");
                        self.delete(&group);
                    }
                } else if self
                    .storage
                    .get(&group)
                    .and_then(Entry::as_group)
                    .map_or(false, |g| g.contains_key(&key))
                {
                    self.audit.remove_member(key.as_str(), group.as_str());
                }

                self.group_names.insert(group.clone());
                self.audit.push(
                    AuditRecord::new(key.as_str(), type_name, Some(group.as_str()))
                        .with_value(value.rendered()),
                );
                debug!(key = %key, group = %group, type_name, "set");

                match self
                    .storage
                    .entry(group)
                    .or_insert_with(|| Entry::Group(Group::default()))
                {
                    Entry::Group(members) => {
                        members.insert(key, value);
                    }
                    // group_names and storage disagree; restore the invariant
                    slot => {
                        warn!(key = %key, "group name held a scalar, replacing");
                        let mut members = Group::default();
                        members.insert(key, value);
                        *slot = Entry::Group(members);
                    }
                }
            }
        }
    }

    fn delete(&mut self, key: &Key) -> bool {
        if self.group_names.remove(key) {
            self.storage.remove(key);
            self.audit.remove_group(key.as_str());
            debug!(group = %key, "deleted group");
            return true;
        }
        let existed = self.storage.remove(key).is_some();
        if existed {
            self.audit.remove_key(key.as_str());
            debug!(key = %key, "deleted");
        }
        existed
    }

    fn clear(&mut self) {
        self.storage.clear();
        self.group_names.clear();
        self.audit.clear();
    }
}

/// Case-insensitive key/value session with grouping.
///
/// Create one with [`Session::new`] or [`Session::builder`]; the root crate
/// additionally exposes a process-wide instance.
///
/// # Example
///
/// ```
/// use appsession_storage::Session;
///
/// let session = Session::new();
/// session.set("Fruit", "Apple".to_string());
/// session.set_in("order", "main_dish", "Steak".to_string());
///
/// assert_eq!(session.get_as::<String>("FRUIT").as_deref(), Some("Apple"));
/// assert_eq!(session.get_group("order").map(|g| g.len()), Some(1));
/// assert_eq!(session.count(), 2);
/// ```
#[derive(Debug)]
pub struct Session {
    state: RwLock<SessionState>,
    config: SessionConfig,
}

impl Session {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create an empty session with the given settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            state: RwLock::new(SessionState::new(&config)),
            config,
        }
    }

    /// Create a builder for session configuration.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Settings this session was created with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Store `value` under `key`, outside of any group.
    ///
    /// An empty key is ignored. If `key` currently names a group, the group
    /// is deleted first.
    pub fn set<T: Any + Send + Sync>(&self, key: &str, value: T) {
        self.put(key, Value::new(value), None);
    }

    /// Store `value` as member `key` of `group`.
    ///
    /// An empty group behaves like [`Session::set`]. If `group` currently
    /// names a scalar, the scalar is deleted first.
    pub fn set_in<T: Any + Send + Sync>(&self, group: &str, key: &str, value: T) {
        self.put(key, Value::new(value), Some(group));
    }

    /// Like [`Session::set`], and the dump also shows the value.
    pub fn set_debug<T: Any + Send + Sync + Debug>(&self, key: &str, value: T) {
        self.put(key, Value::with_debug(value), None);
    }

    /// Like [`Session::set_in`], and the dump also shows the value.
    pub fn set_in_debug<T: Any + Send + Sync + Debug>(&self, group: &str, key: &str, value: T) {
        self.put(key, Value::with_debug(value), Some(group));
    }

    /// Store an already wrapped value with an optional group.
    ///
    /// This is the full-control form behind [`Session::set`] and
    /// [`Session::set_in`].
    pub fn put(&self, key: &str, value: Value, group: Option<&str>) {
        let Ok(key) = Key::parse(key) else {
            trace!("ignoring set with empty key");
            return;
        };
        let group = Key::group(group);
        self.state.write().put(key, value, group);
    }

    /// Delete a key; for a group name, the whole group.
    ///
    /// Returns `true` if something was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.state.write().delete(&Key::new(key))
    }

    /// Remove everything: entries, group names and the audit log.
    pub fn clear(&self) {
        self.state.write().clear();
        debug!("session cleared");
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the entry stored under `key`.
    ///
    /// For a group name this is the group itself.
    pub fn get(&self, key: &str) -> Option<Entry> {
        let key = Key::new(key);
        trace!(key = %key, "get");
        self.state.read().storage.get(&key).cloned()
    }

    /// Get a scalar cloned out as `T`.
    ///
    /// `None` when the key is absent, names a group, holds a stored `None`,
    /// or holds another type.
    pub fn get_as<T: Any + Clone>(&self, key: &str) -> Option<T> {
        let key = Key::new(key);
        trace!(key = %key, "get_as");
        self.state.read().storage.get(&key).and_then(Entry::downcast::<T>)
    }

    /// Get a scalar as `T`, reporting why the lookup failed.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the key is absent or holds a stored `None`
    /// - [`Error::WrongType`] if the key names a group or another type
    pub fn try_get<T: Any + Clone>(&self, key: &str) -> Result<T> {
        let key = Key::new(key);
        let state = self.state.read();
        let value = match state.storage.get(&key) {
            None => return Err(Error::NotFound(key.into_string())),
            Some(Entry::Group(_)) => {
                return Err(Error::WrongType {
                    expected: std::any::type_name::<T>().to_string(),
                    actual: GROUP_TYPE_NAME.to_string(),
                })
            }
            Some(Entry::Value(value)) => value,
        };
        if let Some(found) = value.downcast::<T>() {
            return Ok(found);
        }
        if matches!(value.downcast_ref::<Option<T>>(), Some(None)) {
            return Err(Error::NotFound(key.into_string()));
        }
        Err(Error::WrongType {
            expected: std::any::type_name::<T>().to_string(),
            actual: value.type_name().to_string(),
        })
    }

    /// Get a group by name.
    pub fn get_group(&self, key: &str) -> Option<Group> {
        self.get(key).and_then(Entry::into_group)
    }

    /// Get and delete in one step.
    pub fn pop(&self, key: &str) -> Option<Entry> {
        let key = Key::new(key);
        let mut state = self.state.write();
        let entry = state.storage.get(&key).cloned();
        state.delete(&key);
        debug!(key = %key, found = entry.is_some(), "pop");
        entry
    }

    /// Pop a scalar as `T`.
    ///
    /// The key is deleted even when the stored type does not match.
    pub fn pop_as<T: Any + Clone>(&self, key: &str) -> Option<T> {
        self.pop(key).and_then(|entry| entry.downcast::<T>())
    }

    /// Check if `key` exists as a top-level entry (scalar or group).
    pub fn contains(&self, key: &str) -> bool {
        self.state.read().storage.contains_key(Key::new(key).as_str())
    }

    /// Number of top-level entries; a group counts once.
    pub fn count(&self) -> usize {
        self.state.read().storage.len()
    }

    /// Alias of [`Session::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Check if the session holds no entries
    pub fn is_empty(&self) -> bool {
        self.state.read().storage.is_empty()
    }

    /// All top-level keys, scalars and group names together.
    pub fn keys(&self) -> BTreeSet<String> {
        self.state
            .read()
            .storage
            .keys()
            .map(|k| k.as_str().to_owned())
            .collect()
    }

    /// Keys that currently name a group.
    pub fn groups(&self) -> BTreeSet<String> {
        self.state
            .read()
            .group_names
            .iter()
            .map(|k| k.as_str().to_owned())
            .collect()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Snapshot of the audit log in insertion order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.state.read().audit.records().to_vec()
    }

    /// Print a diagnostic dump to stdout.
    pub fn info(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.info_to(&mut out) {
            warn!(error = %e, "failed to write session info");
        }
    }

    /// Write the diagnostic dump to `out`.
    ///
    /// The first line is `Count = N`, followed by one `[record]` line per
    /// audit record. Values written with [`Session::set_debug`] or
    /// [`Session::set_in_debug`] are shown as `value: (..)`.
    pub fn info_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (count, records) = {
            let state = self.state.read();
            (state.storage.len(), state.audit.records().to_vec())
        };
        writeln!(out, "Count = {}", count)?;
        for record in &records {
            writeln!(out, "[{}]", record)?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
