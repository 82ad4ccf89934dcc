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
//! The firing player's view of their opponent's board.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use log::{debug, warn};

use crate::{
    board::{grid::GridStorage, CoordinateState, DrawableBoard, Grid, PlayerBoard, Position},
    observers::{BoardObserver, InvalidArgument},
};

/// Records the hits and misses scored against another player's [`PlayerBoard`]. It knows
/// nothing about the opponent's ships, so its cells only ever become
/// [`CoordinateState::Hit`] or [`CoordinateState::Miss`], and only as reported by the
/// boards it is registered with.
#[derive(Debug, Default)]
pub struct OpponentBoard {
    mirror: Rc<Mirror>,
}

/// Observer half of an [`OpponentBoard`], shared weakly with the boards it watches.
#[derive(Debug, Default)]
struct Mirror {
    grid: RefCell<GridStorage>,
}

impl Mirror {
    fn mark(&self, position: Position, state: CoordinateState) {
        match self.grid.borrow_mut().get_mut(position) {
            Some(cell) => *cell = state,
            None => warn!("ignoring {:?} reported off the board at {}", state, position),
        }
    }
}

impl BoardObserver for Mirror {
    fn hit(&self, position: Position) {
        self.mark(position, CoordinateState::Hit);
    }

    fn miss(&self, position: Position) {
        self.mark(position, CoordinateState::Miss);
    }
}

impl OpponentBoard {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start mirroring the shots fired at `board`. Registering with the same board twice
    /// has no further effect. The board stops being mirrored once this
    /// [`OpponentBoard`] is dropped.
    pub fn register(&self, board: &mut PlayerBoard) -> Result<(), InvalidArgument> {
        board.add_board_observer(self.observer())?;
        debug!("opponent board registered");
        Ok(())
    }

    /// Stop mirroring the shots fired at `board`. Returns whether this board was
    /// registered with it.
    pub fn unregister(&self, board: &mut PlayerBoard) -> Result<bool, InvalidArgument> {
        board.remove_board_observer(&self.observer())
    }

    fn observer(&self) -> Weak<dyn BoardObserver> {
        let mirror: Rc<dyn BoardObserver> = self.mirror.clone();
        Rc::downgrade(&mirror)
    }
}

impl DrawableBoard for OpponentBoard {
    fn grid(&self) -> Grid {
        self.mirror.grid.borrow().snapshot()
    }
}
