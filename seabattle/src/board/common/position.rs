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
use std::{convert::TryFrom, fmt};

use thiserror::Error;

/// Error returned when constructing a [`Position`] with a negative coordinate.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("({x}, {y}) is not a valid position: coordinates must be greater than or equal to 0")]
pub struct InvalidCoordinate {
    x: i32,
    y: i32,
}

impl InvalidCoordinate {
    /// The `x` coordinate that was requested.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The `y` coordinate that was requested.
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Coordinates of a cell on a board. Never negative, but not bounded by the board size
/// either.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Horizontal position of the cell.
    x: usize,
    /// Vertical position of the cell.
    y: usize,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`. Fails if either is negative.
    pub fn new(x: i32, y: i32) -> Result<Self, InvalidCoordinate> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self { x: ux, y: uy }),
            _ => Err(InvalidCoordinate { x, y }),
        }
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> usize {
        self.y
    }
}

impl From<(usize, usize)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (usize, usize) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = InvalidCoordinate;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
