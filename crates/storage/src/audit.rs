//! Insertion audit log
//!
//! Every accepted `set` appends one record. Member overwrites and deletes
//! prune the records they supersede; a scalar overwrite is a plain replace
//! and keeps the earlier record. The log feeds diagnostic dumps only and is
//! never consulted for lookups.

use std::fmt;

/// One insertion: key, stored type and owning group (empty when ungrouped)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Normalized key
    pub key: String,
    /// Type name of the stored value
    pub type_name: &'static str,
    /// Normalized group name, or empty
    pub group: String,
    /// `Debug` rendering of the value, when it was stored with one
    pub value: Option<String>,
}

impl AuditRecord {
    pub(crate) fn new(key: &str, type_name: &'static str, group: Option<&str>) -> Self {
        Self {
            key: key.to_owned(),
            type_name,
            group: group.unwrap_or_default().to_owned(),
            value: None,
        }
    }

    pub(crate) fn with_value(mut self, rendered: Option<&str>) -> Self {
        self.value = rendered.map(str::to_owned);
        self
    }

    /// Check if the record belongs to a group
    pub fn is_grouped(&self) -> bool {
        !self.group.is_empty()
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": ", self.key)?;
        if let Some(value) = &self.value {
            write!(f, "value: ({}), ", value)?;
        }
        write!(f, "type: {}", self.type_name)?;
        if self.is_grouped() {
            write!(f, ", group: {}", self.group)?;
        }
        Ok(())
    }
}

/// Ordered record list with prune operations
#[derive(Debug, Clone)]
pub(crate) struct AuditLog {
    records: Vec<AuditRecord>,
    enabled: bool,
}

impl AuditLog {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            records: Vec::new(),
            enabled,
        }
    }

    pub(crate) fn push(&mut self, record: AuditRecord) {
        if self.enabled {
            self.records.push(record);
        }
    }

    /// Drop every record carrying `key`, grouped or not
    pub(crate) fn remove_key(&mut self, key: &str) {
        self.records.retain(|r| r.key != key);
    }

    /// Drop records of one member of a group
    pub(crate) fn remove_member(&mut self, key: &str, group: &str) {
        self.records.retain(|r| !(r.key == key && r.group == group));
    }

    /// Drop every record belonging to a group
    pub(crate) fn remove_group(&mut self, group: &str) {
        self.records.retain(|r| r.group != group);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    pub(crate) fn records(&self) -> &[AuditRecord] {
        &self.records
    }
}
