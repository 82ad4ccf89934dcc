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
use enumflags2::BitFlags;

use crate::board::Position;

/// Direction a ship faces. The bow is the forward-most cell, so the rest of the hull
/// extends the opposite way.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing increasing `y`. The hull trails toward decreasing `y`.
    North = 0b0001,
    /// Facing increasing `x`. The hull trails toward decreasing `x`.
    East = 0b0010,
    /// Facing decreasing `y`. The hull trails toward increasing `y`.
    South = 0b0100,
    /// Facing decreasing `x`. The hull trails toward increasing `x`.
    West = 0b1000,
}

impl Heading {
    /// Every heading.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The hull cell directly behind `from`, or `None` if its coordinate would not fit
    /// in a `usize`.
    pub(crate) fn trailing(self, from: Position) -> Option<Position> {
        let (x, y): (usize, usize) = from.into();
        match self {
            Heading::North => y.checked_sub(1).map(|y| Position::from((x, y))),
            Heading::East => x.checked_sub(1).map(|x| Position::from((x, y))),
            Heading::South => y.checked_add(1).map(|y| Position::from((x, y))),
            Heading::West => x.checked_add(1).map(|x| Position::from((x, y))),
        }
    }
}
