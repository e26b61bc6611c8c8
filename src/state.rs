// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Counter state

use std::fmt;

/// Identifies an observer registered with [`CounterState::observe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

type Observer = Box<dyn FnMut(u64)>;

/// A single counter value
///
/// The only mutation is [`CounterState::increment`]. Observers are notified
/// synchronously, in registration order, after every transition.
#[derive(Default)]
pub struct CounterState {
    value: u64,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u32,
}

impl CounterState {
    /// Construct, starting from zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Add one and return the new value
    ///
    /// The value saturates at `u64::MAX`: incrementing from there returns
    /// `u64::MAX` again (and still notifies observers).
    pub fn increment(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        let value = self.value;
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
        value
    }

    /// Register a callback invoked with the new value after each transition
    pub fn observe<F: FnMut(u64) + 'static>(&mut self, f: F) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer = self.next_observer.wrapping_add(1);
        self.observers.push((id, Box::new(f)));
        id
    }

    /// Remove an observer
    ///
    /// Returns false if `id` was not registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != len
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CounterState")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_zero() {
        assert_eq!(CounterState::new().value(), 0);
    }

    #[test]
    fn increment_returns_successor() {
        let mut state = CounterState::new();
        for n in 1..=10 {
            assert_eq!(state.increment(), n);
            assert_eq!(state.value(), n);
        }
    }

    #[test]
    fn increment_saturates() {
        let mut state = CounterState {
            value: u64::MAX - 1,
            ..CounterState::default()
        };
        assert_eq!(state.increment(), u64::MAX);
        assert_eq!(state.increment(), u64::MAX);
    }

    #[test]
    fn observer_ids_wrap() {
        let mut state = CounterState {
            next_observer: u32::MAX,
            ..CounterState::default()
        };
        let last = state.observe(|_| ());
        let first = state.observe(|_| ());
        assert_eq!(last, ObserverId(u32::MAX));
        assert_eq!(first, ObserverId(0));
    }

    #[test]
    fn observers_see_each_value() {
        let mut state = CounterState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s2 = seen.clone();
        state.observe(move |v| s2.borrow_mut().push(v));
        state.increment();
        state.increment();
        state.increment();
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn unobserve_detaches() {
        let mut state = CounterState::new();
        let calls = Rc::new(RefCell::new(0));
        let c2 = calls.clone();
        let id = state.observe(move |_| *c2.borrow_mut() += 1);
        state.increment();
        assert!(state.unobserve(id));
        assert!(!state.unobserve(id));
        state.increment();
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(state.observer_count(), 0);
    }
}
