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
//! Types used for defining ships.

use std::{iter, rc::Weak};

use log::debug;

pub use self::{classes::ShipClass, errors::InvalidShipSpec, heading::Heading};

use crate::{
    board::Position,
    observers::{InvalidArgument, ObserverSet, ShipObserver},
};

mod classes;
mod errors;
mod heading;

/// Shortest ship allowed.
pub const MIN_SHIP_LENGTH: usize = 1;

/// Longest ship allowed.
pub const MAX_SHIP_LENGTH: usize = 5;

/// A named ship. The ship's bow sits at the position it was built with and the rest of
/// its hull trails behind, opposite its [`Heading`]. The cells it covers are fixed when
/// it is built; only its remaining lives change after that.
#[derive(Debug)]
pub struct Ship {
    name: String,
    len: usize,
    heading: Heading,
    bow: Position,

    /// Cells covered by the hull, bow first.
    positions: Vec<Position>,

    /// Starts at `len`. Goes below zero if a cell is hit again after the ship sank.
    lives: i32,

    /// Listeners for this ship sinking.
    observers: ObserverSet<dyn ShipObserver>,
}

impl Ship {
    /// Build a ship. Fails if `name` is empty or whitespace, or if `len` is not between
    /// [`MIN_SHIP_LENGTH`] and [`MAX_SHIP_LENGTH`].
    ///
    /// The ship does not check whether it fits on a board; that is up to the board it is
    /// added to. Hull cells whose coordinates would go below zero or past `usize::MAX` are
    /// left out of
    /// [`positions`][Ship::positions], so such a ship can never be placed.
    pub fn new<N: Into<String>>(
        name: N,
        len: usize,
        heading: Heading,
        bow: Position,
    ) -> Result<Self, InvalidShipSpec> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidShipSpec::BlankName);
        }
        if len < MIN_SHIP_LENGTH || len > MAX_SHIP_LENGTH {
            return Err(InvalidShipSpec::LengthOutOfRange(len));
        }
        Ok(Self::new_unchecked(name, len, heading, bow))
    }

    /// Build a ship whose name and length are already known to be valid.
    pub(crate) fn new_unchecked(name: String, len: usize, heading: Heading, bow: Position) -> Self {
        Self {
            positions: hull(bow, heading, len),
            lives: len as i32,
            name,
            len,
            heading,
            bow,
            observers: ObserverSet::new(),
        }
    }

    /// The ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the ship is long.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Direction the ship faces.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Position of the ship's bow.
    pub fn bow(&self) -> Position {
        self.bow
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Lives left before the ship is sunk.
    pub fn remaining_lives(&self) -> i32 {
        self.lives
    }

    /// Returns true if `target` is one of this ship's cells, taking one of its lives.
    ///
    /// Hits are not deduplicated: every call on a covered cell takes another life, even
    /// for a cell that was already hit. Sunk observers are notified when lives reach
    /// exactly zero.
    pub fn is_hit(&mut self, target: Position) -> bool {
        if !self.positions.contains(&target) {
            return false;
        }
        self.lives -= 1;
        if self.lives == 0 {
            debug!("{} sunk", self.name);
            for observer in self.observers.live() {
                observer.sunk(self);
            }
        }
        true
    }

    /// Returns true if the ship has no lives left.
    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Returns true if this ship and `other` cover at least one cell in common.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.positions
            .iter()
            .any(|position| other.positions.contains(position))
    }

    /// Register a listener for this ship sinking.
    pub fn add_ship_observer(
        &mut self,
        observer: Weak<dyn ShipObserver>,
    ) -> Result<(), InvalidArgument> {
        self.observers.add(observer, "ship observer")
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_ship_observer(
        &mut self,
        observer: &Weak<dyn ShipObserver>,
    ) -> Result<bool, InvalidArgument> {
        self.observers.remove(observer, "ship observer")
    }
}

/// Cells covered by a hull of `len` cells with its bow at `bow`, bow first. Stops early
/// at a cell whose coordinates would not fit in a `usize`.
pub(crate) fn hull(bow: Position, heading: Heading, len: usize) -> Vec<Position> {
    iter::successors(Some(bow), |&previous| heading.trailing(previous))
        .take(len)
        .collect()
}
