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
//! The board holding a player's own ships.

use std::rc::Weak;

use enumflags2::BitFlags;
use log::{debug, trace};

use crate::{
    board::{
        grid::GridStorage, on_board, CannotPlaceReason, CoordinateState, DrawableBoard, Grid,
        PlaceError, Position, ShotError, BOARD_HEIGHT, BOARD_WIDTH,
    },
    observers::{check_live, BoardObserver, InvalidArgument, ObserverSet, ShipObserver},
    ships::{hull, Heading, Ship, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH},
};

/// Result of a shot that landed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, which is still afloat.
    Hit,
    /// The shot hit a ship and that hit sank it.
    Sunk,
}

/// A player's own board, holding their ships. Validates ship placement, resolves shots
/// and tells its [`BoardObserver`]s about every hit and miss.
///
/// Boards are always `BOARD_WIDTH` by `BOARD_HEIGHT`.
#[derive(Debug, Default)]
pub struct PlayerBoard {
    /// State of every cell.
    grid: GridStorage,

    /// Ships in the order they were added. Their cells never overlap.
    ships: Vec<Ship>,

    /// Listeners for hits and misses.
    observers: ObserverSet<dyn BoardObserver>,
}

impl PlayerBoard {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ship to the board. Fails if any part of the ship would be off the board, or
    /// if it would overlap a ship already on the board. On failure the board is unchanged
    /// and the ship is returned inside the error.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Err(reason) = self.check_placement(&ship) {
            debug!("rejected {}: {}", ship.name(), reason);
            return Err(PlaceError::new(reason, ship));
        }
        for position in ship.positions() {
            self.grid[position] = CoordinateState::ShipUnhit;
        }
        debug!(
            "placed {} at {} heading {:?}",
            ship.name(),
            ship.bow(),
            ship.heading()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Check bounds first, then overlap with each ship already on the board.
    fn check_placement(&self, ship: &Ship) -> Result<(), CannotPlaceReason> {
        if !in_bounds(ship.bow(), ship.heading(), ship.len()) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
        if self.ships.iter().any(|existing| existing.overlaps(ship)) {
            return Err(CannotPlaceReason::ShipOverlap);
        }
        Ok(())
    }

    /// Get the set of headings a ship of length `len` with its bow at `bow` could be
    /// added with. Empty if `len` is not a valid ship length.
    pub fn open_headings(&self, bow: Position, len: usize) -> BitFlags<Heading> {
        let mut open = BitFlags::empty();
        if len < MIN_SHIP_LENGTH || len > MAX_SHIP_LENGTH {
            return open;
        }
        for &heading in Heading::ALL.iter() {
            if !in_bounds(bow, heading, len) {
                continue;
            }
            let cells = hull(bow, heading, len);
            if !self
                .ships
                .iter()
                .any(|ship| cells.iter().any(|cell| ship.positions().contains(cell)))
            {
                open |= heading;
            }
        }
        open
    }

    /// Fire at `target`. Every ship is asked whether it was hit; a hit marks the cell
    /// [`CoordinateState::ShipHit`] and notifies observers of the hit, otherwise the cell
    /// is marked [`CoordinateState::Miss`] and observers are notified of the miss.
    ///
    /// Cells that were fired at before are resolved again, so re-firing at a ship's cell
    /// takes another of its lives.
    pub fn fire_mine(&mut self, target: Position) -> Result<ShotOutcome, ShotError> {
        if !on_board(target) {
            return Err(ShotError::new(target));
        }
        let mut outcome = ShotOutcome::Miss;
        for ship in self.ships.iter_mut() {
            if ship.is_hit(target) {
                self.grid[target] = CoordinateState::ShipHit;
                outcome = if ship.is_sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
            }
        }
        trace!("shot at {}: {:?}", target, outcome);
        match outcome {
            ShotOutcome::Miss => {
                for observer in self.observers.live() {
                    observer.miss(target);
                }
                self.grid[target] = CoordinateState::Miss;
            }
            ShotOutcome::Hit | ShotOutcome::Sunk => {
                for observer in self.observers.live() {
                    observer.hit(target);
                }
            }
        }
        Ok(outcome)
    }

    /// Number of ships on this board which have not been sunk.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Returns true if at least one ship was added and none remain afloat.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.remaining_ship_count() == 0
    }

    /// Read-only view of the ships, in the order they were added.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Register a listener for hits and misses on this board.
    pub fn add_board_observer(
        &mut self,
        observer: Weak<dyn BoardObserver>,
    ) -> Result<(), InvalidArgument> {
        self.observers.add(observer, "board observer")?;
        debug!("board observer added, {} registered", self.observers.len());
        Ok(())
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_board_observer(
        &mut self,
        observer: &Weak<dyn BoardObserver>,
    ) -> Result<bool, InvalidArgument> {
        self.observers.remove(observer, "board observer")
    }

    /// Register a sunk listener with every ship currently on this board.
    pub fn watch_ships(&mut self, observer: Weak<dyn ShipObserver>) -> Result<(), InvalidArgument> {
        check_live(&observer, "ship observer")?;
        for ship in self.ships.iter_mut() {
            ship.add_ship_observer(observer.clone())?;
        }
        Ok(())
    }
}

impl DrawableBoard for PlayerBoard {
    fn grid(&self) -> Grid {
        self.grid.snapshot()
    }
}

/// Returns true if a ship of length `len` with its bow at `bow` and facing `heading` lies
/// entirely on the board. Each heading is checked on its own so the arithmetic for every
/// direction stays visible.
fn in_bounds(bow: Position, heading: Heading, len: usize) -> bool {
    let (x, y) = (bow.x(), bow.y());
    if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
        return false;
    }
    match heading {
        // y - (len - 1) >= 0
        Heading::North => y + 1 >= len,
        // x - (len - 1) >= 0
        Heading::East => x + 1 >= len,
        // y + (len - 1) <= BOARD_HEIGHT - 1
        Heading::South => y + len <= BOARD_HEIGHT,
        // x + (len - 1) <= BOARD_WIDTH - 1
        Heading::West => x + len <= BOARD_WIDTH,
    }
}
