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
//! Types that make up the game boards.

pub use self::{
    common::{InvalidCoordinate, Position},
    errors::{CannotPlaceReason, PlaceError, ShotError},
    opponent::OpponentBoard,
    player::{PlayerBoard, ShotOutcome},
};

pub mod common;
mod errors;
mod grid;
mod opponent;
mod player;

/// Width of every board. This cooresponds to the `x` coordinate of a [`Position`].
pub const BOARD_WIDTH: usize = 10;

/// Height of every board. This cooresponds to the `y` coordinate of a [`Position`].
pub const BOARD_HEIGHT: usize = 10;

/// State of a single cell of a board, used by whoever draws it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordinateState {
    /// Nothing is known about this cell.
    Empty,
    /// A ship occupies this cell and it has not been hit.
    ShipUnhit,
    /// A ship occupies this cell and it has been hit.
    ShipHit,
    /// A shot at this cell hit a ship the board does not know about.
    Hit,
    /// A shot at this cell hit nothing.
    Miss,
}

impl Default for CoordinateState {
    fn default() -> Self {
        CoordinateState::Empty
    }
}

/// Snapshot of every cell of a board, indexed column-major as `grid[x][y]`.
pub type Grid = [[CoordinateState; BOARD_HEIGHT]; BOARD_WIDTH];

/// A board that can hand out a snapshot of its cells for drawing.
pub trait DrawableBoard {
    /// Get a copy of this board's cells. The copy is detached from the board: changing it
    /// never affects the board or later snapshots.
    fn grid(&self) -> Grid;
}

/// Returns true if `position` lies within `[0, BOARD_WIDTH) x [0, BOARD_HEIGHT)`.
pub fn on_board(position: Position) -> bool {
    position.x() < BOARD_WIDTH && position.y() < BOARD_HEIGHT
}
