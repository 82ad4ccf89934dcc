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
use std::{
    cell::RefCell,
    io::{self, Write},
    rc::{Rc, Weak},
};

use log::warn;
use seabattle::{
    observers::{InvalidArgument, ShipObserver},
    PlayerBoard, Ship,
};

/// Announces each ship that sinks with a line like `You sunk my Destroyer!!!`.
#[derive(Debug)]
pub struct SunkenShipReporter<W> {
    out: RefCell<W>,
}

impl SunkenShipReporter<io::Stdout> {
    /// Construct a reporter that prints to standard out.
    pub fn stdout() -> Rc<Self> {
        Self::new(io::stdout())
    }
}

impl<W: Write + 'static> SunkenShipReporter<W> {
    /// Construct a reporter that writes to `out`. Ships only hold on to their observers
    /// weakly, so keep the returned handle alive for as long as reports are wanted.
    pub fn new(out: W) -> Rc<Self> {
        Rc::new(Self {
            out: RefCell::new(out),
        })
    }

    /// Report when `ship` sinks.
    pub fn watch_ship(self: &Rc<Self>, ship: &mut Ship) -> Result<(), InvalidArgument> {
        ship.add_ship_observer(self.observer())
    }

    /// Report when any ship currently on `board` sinks.
    pub fn watch_board(self: &Rc<Self>, board: &mut PlayerBoard) -> Result<(), InvalidArgument> {
        board.watch_ships(self.observer())
    }

    /// Extract the writer from this reporter.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn observer(self: &Rc<Self>) -> Weak<dyn ShipObserver> {
        let observer: Rc<dyn ShipObserver> = self.clone();
        Rc::downgrade(&observer)
    }

    fn report(&self, ship: &Ship) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "You sunk my {}!!!", ship.name())?;
        out.flush()
    }
}

impl<W: Write + 'static> ShipObserver for SunkenShipReporter<W> {
    fn sunk(&self, ship: &Ship) {
        if let Err(err) = self.report(ship) {
            warn!("could not report that {} sunk: {}", ship.name(), err);
        }
    }
}
