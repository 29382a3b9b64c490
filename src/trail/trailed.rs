// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed values that automatically record changes for backtracking.

use super::Trail;

/// Types that can be stored on the trail as a single `u64`.
///
/// The circuit depth is the only trailed value, so only `usize` is provided.
pub trait TrailWord: Copy {
    fn to_word(self) -> u64;
    fn from_word(word: u64) -> Self;
}

impl TrailWord for usize {
    fn to_word(self) -> u64 {
        self as u64
    }

    fn from_word(word: u64) -> Self {
        word as usize
    }
}

/// A value that records its old value on the trail whenever it is set.
///
/// # Example
///
/// ```
/// use adder_search::trail::{Restore, Trail, Trailed, TrailedRegistry};
///
/// let mut trail = Trail::new();
/// let mut registry = TrailedRegistry::new();
/// let mut depth: Trailed<usize> = registry.register(0);
///
/// let checkpoint = trail.len();
/// depth.set(&mut trail, 3);
/// assert_eq!(depth.get(), 3);
///
/// struct One<'a>(&'a mut Trailed<usize>);
/// impl Restore for One<'_> {
///     fn restore(&mut self, id: usize, old_value: u64) {
///         self.0.restore_if(id, old_value);
///     }
/// }
/// trail.rewind_to(checkpoint, &mut One(&mut depth));
/// assert_eq!(depth.get(), 0);
/// ```
#[derive(Debug)]
pub struct Trailed<T: TrailWord> {
    /// The current value
    value: T,
    /// Unique identifier for trail tracking
    id: usize,
}

impl<T: TrailWord> Trailed<T> {
    /// Create a new trailed value with the given ID.
    ///
    /// The caller must ensure that `id` is unique within the context.
    /// Use `TrailedRegistry` to manage IDs.
    pub(crate) fn new(id: usize, initial_value: T) -> Self {
        Self {
            value: initial_value,
            id,
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value
    }

    /// Get the unique ID for this trailed value.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Set the value, recording the old value in the trail.
    pub fn set(&mut self, trail: &mut Trail, new_value: T) {
        trail.record_change(self.id, self.value.to_word());
        self.value = new_value;
    }

    /// Restore `old_value` if `id` names this value.
    ///
    /// Returns true if the entry belonged to this value.
    pub fn restore_if(&mut self, id: usize, old_value: u64) -> bool {
        if id == self.id {
            self.value = T::from_word(old_value);
            true
        } else {
            false
        }
    }
}

/// Registry for managing unique IDs for Trailed values.
#[derive(Debug, Default)]
pub struct TrailedRegistry {
    next_id: usize,
}

impl TrailedRegistry {
    /// Create a new registry starting at ID 0.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Register a new trailed value with an initial value.
    pub fn register<T: TrailWord>(&mut self, initial_value: T) -> Trailed<T> {
        let id = self.next_id;
        self.next_id += 1;
        Trailed::new(id, initial_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailed_basic() {
        let mut trail = Trail::new();
        let mut registry = TrailedRegistry::new();
        let mut value = registry.register(42usize);

        assert_eq!(value.get(), 42);
        assert_eq!(value.id(), 0);

        value.set(&mut trail, 100);
        assert_eq!(value.get(), 100);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_restore_if_checks_id() {
        let mut registry = TrailedRegistry::new();
        let mut first = registry.register(7usize);
        let mut second = registry.register(9usize);

        assert!(!first.restore_if(second.id(), 0));
        assert_eq!(first.get(), 7);
        assert!(second.restore_if(1, 0));
        assert_eq!(second.get(), 0);
        assert!(first.restore_if(0, 3));
        assert_eq!(first.get(), 3);
    }

    #[test]
    fn test_registry_unique_ids() {
        let mut registry = TrailedRegistry::new();

        let v1 = registry.register(1usize);
        let v2 = registry.register(2usize);
        let v3 = registry.register(3usize);

        assert_eq!(v1.id(), 0);
        assert_eq!(v2.id(), 1);
        assert_eq!(v3.id(), 2);
    }
}
