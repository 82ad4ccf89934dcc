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
use crate::{
    board::Position,
    ships::{Heading, Ship},
};

/// The ships of the standard fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// One of each ship in the standard fleet, longest first.
    pub const ALL: [ShipClass; 5] = [
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Submarine,
        ShipClass::Destroyer,
    ];

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Get the name given to ships of this class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Build a ship of this class.
    pub fn build(self, heading: Heading, bow: Position) -> Ship {
        Ship::new_unchecked(self.name().to_owned(), self.len(), heading, bow)
    }
}
