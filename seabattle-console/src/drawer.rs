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
use std::io::{self, Write};

use seabattle::board::{CoordinateState, DrawableBoard, BOARD_HEIGHT, BOARD_WIDTH};

/// Something that can present a board.
pub trait BoardDrawer {
    /// Draw the current state of `board`.
    fn draw(&mut self, board: &dyn DrawableBoard) -> io::Result<()>;
}

/// Draws boards as text, one row per line with the highest `y` at the top.
///
/// ```text
/// ---------------------
/// | | | | | | | | | | |
/// ...
/// |O| | | |*|#| | | | |
/// ---------------------
/// ```
#[derive(Debug)]
pub struct ConsoleBoardDrawer<W> {
    out: W,
}

impl ConsoleBoardDrawer<io::Stdout> {
    /// Construct a drawer that prints to standard out.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleBoardDrawer<W> {
    /// Construct a drawer that writes to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Extract the writer from this drawer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BoardDrawer for ConsoleBoardDrawer<W> {
    fn draw(&mut self, board: &dyn DrawableBoard) -> io::Result<()> {
        let grid = board.grid();
        let rule = "-".repeat(BOARD_WIDTH * 2 + 1);
        for y in (0..BOARD_HEIGHT).rev() {
            writeln!(self.out, "{}", rule)?;
            for column in grid.iter() {
                write!(self.out, "|{}", marker(column[y]))?;
            }
            writeln!(self.out, "|")?;
        }
        writeln!(self.out, "{}", rule)?;
        self.out.flush()
    }
}

/// Character drawn for a cell in the given state.
pub fn marker(state: CoordinateState) -> char {
    match state {
        CoordinateState::Empty => ' ',
        CoordinateState::ShipUnhit => '#',
        CoordinateState::ShipHit => '*',
        CoordinateState::Hit => 'X',
        CoordinateState::Miss => 'O',
    }
}
