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
//! Errors used by the [`PlayerBoard`][super::PlayerBoard].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Position, ships::Ship};

/// Reason why a ship could not be placed on a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some part of the ship would be off the board.
    #[error("ship must be entirely on the board")]
    OutOfBounds,
    /// The ship would share a cell with a ship that was already placed.
    #[error("ship would overlap a ship already on the board")]
    ShipOverlap,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the ship
/// back so placement can be retried.
#[derive(Error)]
#[error("could not place {}: {}", .ship.name(), .reason)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error for the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl From<PlaceError> for Ship {
    /// Allows retrieving the rejected ship from the error with into.
    fn from(err: PlaceError) -> Self {
        err.into_ship()
    }
}

/// Error returned when firing at a position that is not on the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not fire at {target}: position is not on the board")]
pub struct ShotError {
    target: Position,
}

impl ShotError {
    pub(super) fn new(target: Position) -> Self {
        Self { target }
    }

    /// Get the position that was fired at.
    pub fn target(&self) -> Position {
        self.target
    }
}
