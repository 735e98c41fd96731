//! Rebindable single-value holder backing the reference traits.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Holds one shared instance and lets it be swapped atomically.
///
/// Readers always observe a complete value written by some `set`; the
/// previous instance is only dropped once its last outside holder lets go.
pub struct Slot<T: ?Sized> {
    current: RwLock<Arc<T>>,
}

impl<T: ?Sized> Slot<T> {
    /// Creates a slot bound to `value`.
    pub fn new(value: Arc<T>) -> Self {
        Self {
            current: RwLock::new(value),
        }
    }

    /// Returns the bound instance.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&*self.current.read())
    }

    /// Rebinds the slot.
    pub fn set(&self, value: Arc<T>) {
        *self.current.write() = value;
    }

    /// Rebinds the slot and returns the previous instance.
    pub fn replace(&self, value: Arc<T>) -> Arc<T> {
        std::mem::replace(&mut *self.current.write(), value)
    }
}

impl<T: ?Sized> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("ptr", &Arc::as_ptr(&*self.current.read()).cast::<()>())
            .finish()
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(Arc::new(T::default()))
    }
}
