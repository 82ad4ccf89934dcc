// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Callback contracts that decouple boards and ships from whoever consumes their events.
//!
//! Observers are held weakly. The emitter never keeps an observer alive, and an observer
//! that has been dropped silently stops receiving notifications. Notifications are
//! delivered synchronously before the triggering call returns, with no ordering between
//! distinct observers.

use std::{
    fmt,
    rc::{Rc, Weak},
};

use thiserror::Error;

use crate::{board::Position, ships::Ship};

/// Listener for the outcome of shots fired at a [`PlayerBoard`][crate::board::PlayerBoard].
pub trait BoardObserver {
    /// A shot at `position` hit a ship.
    fn hit(&self, position: Position);

    /// A shot at `position` hit nothing.
    fn miss(&self, position: Position);
}

/// Listener notified when a [`Ship`] is sunk.
pub trait ShipObserver {
    /// `ship` has just lost its last life.
    fn sunk(&self, ship: &Ship);
}

/// Error returned when an observer argument is unset, meaning the [`Weak`] handle passed
/// in no longer points at a live observer.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{0} cannot be unset")]
pub struct InvalidArgument(&'static str);

impl InvalidArgument {
    /// Name of the rejected argument.
    pub fn argument(&self) -> &'static str {
        self.0
    }
}

/// Fail with [`InvalidArgument`] naming `argument` if `observer` has already been dropped.
pub(crate) fn check_live<T: ?Sized>(
    observer: &Weak<T>,
    argument: &'static str,
) -> Result<(), InvalidArgument> {
    if observer.strong_count() == 0 {
        Err(InvalidArgument(argument))
    } else {
        Ok(())
    }
}

/// Unordered set of weakly held observers, compared by identity.
pub(crate) struct ObserverSet<T: ?Sized> {
    observers: Vec<Weak<T>>,
}

impl<T: ?Sized> ObserverSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer. Adding one that is already present has no effect.
    pub(crate) fn add(
        &mut self,
        observer: Weak<T>,
        argument: &'static str,
    ) -> Result<(), InvalidArgument> {
        check_live(&observer, argument)?;
        self.prune();
        if !self.observers.iter().any(|known| known.ptr_eq(&observer)) {
            self.observers.push(observer);
        }
        Ok(())
    }

    /// Remove an observer, returning whether it was present.
    pub(crate) fn remove(
        &mut self,
        observer: &Weak<T>,
        argument: &'static str,
    ) -> Result<bool, InvalidArgument> {
        check_live(observer, argument)?;
        self.prune();
        let before = self.observers.len();
        self.observers.retain(|known| !known.ptr_eq(observer));
        Ok(self.observers.len() != before)
    }

    /// Strong handles to every observer that is still alive. Notifying from this snapshot
    /// lets an observer add or remove observers while it is being called.
    pub(crate) fn live(&self) -> Vec<Rc<T>> {
        self.observers.iter().filter_map(Weak::upgrade).collect()
    }

    /// Number of observers that are still alive.
    pub(crate) fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }

    /// Drop entries whose observer no longer exists.
    fn prune(&mut self) {
        self.observers.retain(|observer| observer.strong_count() > 0);
    }
}

impl<T: ?Sized> Default for ObserverSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ObserverSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ObserverSet")
            .field("live", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Counter(Cell<usize>);

    trait Poke {
        fn poke(&self);
    }

    impl Poke for Counter {
        fn poke(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counter() -> Rc<Counter> {
        Rc::new(Counter(Cell::new(0)))
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut set: ObserverSet<dyn Poke> = ObserverSet::new();
        let obs = counter();
        set.add(Rc::downgrade(&obs) as Weak<dyn Poke>, "obs").unwrap();
        set.add(Rc::downgrade(&obs) as Weak<dyn Poke>, "obs").unwrap();
        for o in set.live() {
            o.poke();
        }
        assert_eq!(obs.0.get(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn dropped_observers_are_skipped_and_pruned() {
        let mut set: ObserverSet<dyn Poke> = ObserverSet::new();
        let kept = counter();
        let dropped = counter();
        set.add(Rc::downgrade(&kept) as Weak<dyn Poke>, "obs").unwrap();
        set.add(Rc::downgrade(&dropped) as Weak<dyn Poke>, "obs").unwrap();
        drop(dropped);
        assert_eq!(set.live().len(), 1);

        let other = counter();
        set.add(Rc::downgrade(&other) as Weak<dyn Poke>, "obs").unwrap();
        assert_eq!(set.observers.len(), 2);
    }

    #[test]
    fn unset_observer_is_rejected() {
        let mut set: ObserverSet<dyn Poke> = ObserverSet::new();
        let err = set
            .add(Weak::<Counter>::new() as Weak<dyn Poke>, "obs")
            .unwrap_err();
        assert_eq!(err.argument(), "obs");
        assert_eq!(
            set.remove(&(Weak::<Counter>::new() as Weak<dyn Poke>), "obs"),
            Err(InvalidArgument("obs"))
        );
    }

    #[test]
    fn remove_reports_whether_present() {
        let mut set: ObserverSet<dyn Poke> = ObserverSet::new();
        let obs = counter();
        let weak = Rc::downgrade(&obs) as Weak<dyn Poke>;
        assert_eq!(set.remove(&weak, "obs"), Ok(false));
        set.add(weak.clone(), "obs").unwrap();
        assert_eq!(set.remove(&weak, "obs"), Ok(true));
        assert!(set.live().is_empty());
    }
}
