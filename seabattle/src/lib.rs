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
//! Rules engine for the classic two-grid game of Battleship.
//!
//! A [`PlayerBoard`] owns one player's [`Ship`]s, validates where they are placed and
//! resolves shots fired at them. An [`OpponentBoard`] registers with a [`PlayerBoard`]
//! and mirrors the hits and misses it observes, giving the firing player their view of
//! the enemy's ocean.
//!
//! Nothing in this crate draws or prints anything. Boards expose a copy-on-read grid
//! snapshot through [`DrawableBoard`][board::DrawableBoard], and [`observers`] defines the
//! callbacks used to learn about hits, misses and sunk ships as they happen.

pub mod board;
pub mod observers;
pub mod ships;

pub use crate::{
    board::{
        CoordinateState, OpponentBoard, PlayerBoard, Position, ShotOutcome, BOARD_HEIGHT,
        BOARD_WIDTH,
    },
    ships::{Heading, Ship, ShipClass},
};
