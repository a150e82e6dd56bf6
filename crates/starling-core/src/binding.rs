//! Shared reactive state for two-way bindings.
//!
//! A [`ReactiveCell`] is owned jointly by application state and the widgets
//! bound to it. Clones share the value, and bound widgets read it at the start
//! of every measure, paint and event, so a write through any handle is seen
//! on the next frame without rebuilding the widget.
//!
//! # Example
//!
//! ```
//! use starling_core::ReactiveCell;
//!
//! let stars = ReactiveCell::new(5u32);
//! let bound = stars.clone();
//! stars.set(10);
//! assert_eq!(bound.get(), 10);
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

/// A value shared between its owner and bound widgets.
pub struct ReactiveCell<T> {
    value: Arc<RwLock<T>>,
}

impl<T: Clone + Send + Sync + 'static> ReactiveCell<T> {
    /// Create a new reactive cell with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().expect("ReactiveCell lock poisoned").clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read().expect("ReactiveCell lock poisoned"))
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.value.write().expect("ReactiveCell lock poisoned") = value;
    }

    /// Update the value in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value.write().expect("ReactiveCell lock poisoned"));
    }
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for ReactiveCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for ReactiveCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveCell")
            .field("value", &*self.value.read().expect("ReactiveCell lock poisoned"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactive_cell_new() {
        let cell = ReactiveCell::new(42);
        assert_eq!(cell.get(), 42);
    }

    #[test]
    fn test_reactive_cell_set() {
        let cell = ReactiveCell::new(0);
        cell.set(100);
        assert_eq!(cell.get(), 100);
    }

    #[test]
    fn test_reactive_cell_update() {
        let cell = ReactiveCell::new(10);
        cell.update(|v| *v *= 2);
        assert_eq!(cell.get(), 20);
    }

    #[test]
    fn test_reactive_cell_with_borrows() {
        let cell = ReactiveCell::new(vec![1, 2, 3]);
        assert_eq!(cell.with(Vec::len), 3);
    }

    #[test]
    fn test_reactive_cell_default() {
        let cell: ReactiveCell<i32> = ReactiveCell::default();
        assert_eq!(cell.get(), 0);
    }

    #[test]
    fn test_reactive_cell_clones_share_value() {
        let cell1 = ReactiveCell::new(10);
        let cell2 = cell1.clone();

        cell1.set(20);
        assert_eq!(cell2.get(), 20);
        cell2.update(|v| *v += 1);
        assert_eq!(cell1.get(), 21);
        assert_eq!(ReactiveCell::new(20).get(), 20);
    }

    #[test]
    fn test_reactive_cell_debug() {
        let cell = ReactiveCell::new(7);
        assert!(format!("{cell:?}").contains('7'));
    }
}
