//! Groups and top-level entries
//!
//! A group is a named collection of values stored as one top-level entry.
//! Scalars and groups share a single namespace; [`Entry`] tags which kind a
//! key currently holds.

use appsession_core::{Key, Value};
use rustc_hash::FxHashMap;
use std::any::Any;
use std::ops::Index;

/// Type name reported for group entries
pub const GROUP_TYPE_NAME: &str = "Group";

/// Named collection of values keyed by normalized member key
#[derive(Debug, Clone, Default)]
pub struct Group {
    members: FxHashMap<Key, Value>,
}

impl Group {
    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if a member exists (case-insensitive)
    pub fn contains(&self, key: &str) -> bool {
        self.members.contains_key(Key::new(key).as_str())
    }

    /// Get a member value (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(Key::new(key).as_str())
    }

    /// Get a member cloned out as `T`
    ///
    /// Returns `None` when the member is absent or holds another type.
    pub fn get_as<T: Any + Clone>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(Value::downcast::<T>)
    }

    /// Member keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.members.keys().map(|k| k.as_str().to_owned()).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate members in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.members.contains_key(key)
    }

    pub(crate) fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.members.insert(key, value)
    }
}

impl Index<&str> for Group {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the member does not exist, like `HashMap`'s `Index`.
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no member {:?} in group", key),
        }
    }
}

/// A top-level session entry: either a scalar value or a group
#[derive(Debug, Clone)]
pub enum Entry {
    /// Single value stored under its own key
    Value(Value),
    /// Named collection stored under the group name
    Group(Group),
}

impl Entry {
    /// Runtime type name of the entry
    pub fn type_name(&self) -> &'static str {
        match self {
            Entry::Value(v) => v.type_name(),
            Entry::Group(_) => GROUP_TYPE_NAME,
        }
    }

    /// Check if this entry is a group
    pub fn is_group(&self) -> bool {
        matches!(self, Entry::Group(_))
    }

    /// Try to get as scalar value
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Group(_) => None,
        }
    }

    /// Try to get as group
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Entry::Group(g) => Some(g),
            Entry::Value(_) => None,
        }
    }

    /// Consume into the group, if this is one
    pub fn into_group(self) -> Option<Group> {
        match self {
            Entry::Group(g) => Some(g),
            Entry::Value(_) => None,
        }
    }

    /// Clone the scalar value out as `T`
    ///
    /// Groups and mismatched types yield `None`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.as_value().and_then(Value::downcast::<T>)
    }
}
