//! Value type for AppSession
//!
//! This module defines the canonical stored value. A session holds values of
//! arbitrary Rust types side by side, so `Value` is type-erased: it keeps the
//! value behind an `Arc<dyn Any>` together with the type name captured at
//! insertion time.
//!
//! ## Retrieval Contract
//!
//! - No implicit coercions: `i32` stored, `i64` requested is a miss
//! - Mismatches are reported as `None`, never as a panic
//! - A stored `Option<T>` reads back as `T`, and a stored `None` reads as absent
//!
//! The `Option` unwrap is exactly one level deep. A stored
//! `Option<Option<T>>` is reachable as `Option<T>`, not as `T`.
//!
//! ## Rendering
//!
//! `Value::new` places no bound beyond `Any + Send + Sync`, so the contents
//! are opaque to diagnostics. [`Value::with_debug`] additionally captures a
//! `Debug` rendering at construction, which dumps can print.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Canonical AppSession value
///
/// Cloning a `Value` is cheap: clones share one allocation. Values that carry
/// interior mutability (for example `Arc<Mutex<T>>`) therefore keep reference
/// semantics, while plain values are copied in on `set` and cloned out by
/// [`Value::downcast`].
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    rendered: Option<Arc<str>>,
}

impl Value {
    /// Wrap a value of any `'static + Send + Sync` type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
            rendered: None,
        }
    }

    /// Wrap a value and keep its `Debug` rendering for diagnostics.
    pub fn with_debug<T: Any + Send + Sync + fmt::Debug>(value: T) -> Self {
        let rendered: Arc<str> = Arc::from(format!("{:?}", value));
        Self {
            rendered: Some(rendered),
            ..Self::new(value)
        }
    }

    /// Returns the `Debug` rendering captured by [`Value::with_debug`]
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Returns the type name recorded at construction
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the value can be read as `T`
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Try to borrow the stored value as `T`
    ///
    /// Falls back to one level of `Option` unwrapping: a stored `Some(t)` of
    /// type `Option<T>` yields `&t`, a stored `None` yields `None`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if let Some(value) = self.inner.downcast_ref::<T>() {
            return Some(value);
        }
        self.inner
            .downcast_ref::<Option<T>>()
            .and_then(Option::as_ref)
    }

    /// Try to clone the stored value out as `T`
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Check whether two values share the same allocation
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
