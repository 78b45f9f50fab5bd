//! Session configuration and builder.

use crate::session::Session;

/// Settings applied when a [`Session`] is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pre-allocated capacity of the top-level map
    pub capacity: usize,
    /// Whether `set` calls are recorded for `info` dumps
    pub audit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            audit: true,
        }
    }
}

/// Builder for session configuration.
///
/// # Example
///
/// ```
/// use appsession_storage::Session;
///
/// let session = Session::builder()
///     .capacity(64)
///     .audit(false)
///     .build();
/// assert!(session.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the top-level map.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Enable or disable the audit log (enabled by default).
    pub fn audit(mut self, enabled: bool) -> Self {
        self.config.audit = enabled;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Build the session.
    pub fn build(self) -> Session {
        Session::with_config(self.config)
    }
}
