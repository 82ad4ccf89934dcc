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
//! Cell storage shared by [`PlayerBoard`][super::PlayerBoard] and
//! [`OpponentBoard`][super::OpponentBoard]. Each board owns its own storage and decides
//! for itself how cells change.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{on_board, CoordinateState, Grid, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Fixed-size cell container, every cell starting out [`CoordinateState::Empty`].
#[derive(Debug, Clone)]
pub(super) struct GridStorage {
    /// Cells stored column by column.
    cells: Box<[CoordinateState]>,
}

impl GridStorage {
    pub(super) fn new() -> Self {
        Self {
            cells: vec![CoordinateState::Empty; BOARD_WIDTH * BOARD_HEIGHT].into_boxed_slice(),
        }
    }

    /// Convert a position to an index into `cells`, or `None` if it is off the board.
    fn try_linearize(position: &Position) -> Option<usize> {
        if on_board(*position) {
            Some(position.x() * BOARD_HEIGHT + position.y())
        } else {
            None
        }
    }

    /// Get the state of the cell at `position`, if it is on the board.
    #[cfg(test)]
    pub(super) fn get<B: Borrow<Position>>(&self, position: B) -> Option<CoordinateState> {
        Self::try_linearize(position.borrow()).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the cell at `position`, if it is on the board.
    pub(super) fn get_mut<B: Borrow<Position>>(
        &mut self,
        position: B,
    ) -> Option<&mut CoordinateState> {
        Self::try_linearize(position.borrow()).map(move |i| &mut self.cells[i])
    }

    /// Copy every cell into a freshly built [`Grid`].
    pub(super) fn snapshot(&self) -> Grid {
        let mut grid = [[CoordinateState::Empty; BOARD_HEIGHT]; BOARD_WIDTH];
        for (x, column) in grid.iter_mut().enumerate() {
            column.copy_from_slice(&self.cells[x * BOARD_HEIGHT..(x + 1) * BOARD_HEIGHT]);
        }
        grid
    }
}

impl Default for GridStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Borrow<Position>> Index<B> for GridStorage {
    type Output = CoordinateState;

    fn index(&self, position: B) -> &Self::Output {
        let i = Self::try_linearize(position.borrow()).expect("position out of bounds");
        &self.cells[i]
    }
}

impl<B: Borrow<Position>> IndexMut<B> for GridStorage {
    fn index_mut(&mut self, position: B) -> &mut Self::Output {
        let i = Self::try_linearize(position.borrow()).expect("position out of bounds");
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let grid = GridStorage::new().snapshot();
        assert!(grid
            .iter()
            .flat_map(|column| column.iter())
            .all(|&cell| cell == CoordinateState::Empty));
    }

    #[test]
    fn snapshot_is_column_major() {
        let mut storage = GridStorage::new();
        storage[Position::from((2, 7))] = CoordinateState::Miss;
        let grid = storage.snapshot();
        assert_eq!(grid[2][7], CoordinateState::Miss);
        assert_eq!(grid[7][2], CoordinateState::Empty);
    }

    #[test]
    fn snapshot_is_detached() {
        let storage = GridStorage::new();
        let mut grid = storage.snapshot();
        grid[0][0] = CoordinateState::Hit;
        assert_ne!(grid, storage.snapshot());
        assert_eq!(storage.get(Position::from((0, 0))), Some(CoordinateState::Empty));
    }

    #[test]
    fn off_board_cells_are_none() {
        let mut storage = GridStorage::new();
        assert_eq!(storage.get(Position::from((BOARD_WIDTH, 0))), None);
        assert!(storage.get_mut(Position::from((0, BOARD_HEIGHT))).is_none());
    }
}
