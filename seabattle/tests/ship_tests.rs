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
    rc::{Rc, Weak},
};

use seabattle::{
    observers::ShipObserver,
    ships::{InvalidShipSpec, MAX_SHIP_LENGTH},
    Heading, Position, Ship, ShipClass,
};

#[derive(Default)]
struct SunkLog(RefCell<Vec<String>>);

impl ShipObserver for SunkLog {
    fn sunk(&self, ship: &Ship) {
        self.0.borrow_mut().push(ship.name().to_owned());
    }
}

fn at(x: usize, y: usize) -> Position {
    Position::from((x, y))
}

#[test]
fn destroyer_heading_east_trails_west() {
    let ship = Ship::new("Destroyer", 2, Heading::East, at(5, 5)).unwrap();
    assert_eq!(ship.positions(), &[at(5, 5), at(4, 5)]);
    assert_eq!(ship.remaining_lives(), 2);
    assert!(!ship.is_sunk());
}

#[test]
fn hull_trails_opposite_each_heading() {
    let cases = [
        (Heading::North, [at(5, 5), at(5, 4), at(5, 3)]),
        (Heading::East, [at(5, 5), at(4, 5), at(3, 5)]),
        (Heading::South, [at(5, 5), at(5, 6), at(5, 7)]),
        (Heading::West, [at(5, 5), at(6, 5), at(7, 5)]),
    ];
    for (heading, expected) in cases.iter() {
        let ship = Ship::new("Cruiser", 3, *heading, at(5, 5)).unwrap();
        assert_eq!(ship.positions(), &expected[..], "{:?}", heading);
    }
}

#[test]
fn rejects_blank_names() {
    assert_eq!(
        Ship::new("", 3, Heading::North, at(5, 5)).unwrap_err(),
        InvalidShipSpec::BlankName
    );
    assert_eq!(
        Ship::new(" \t ", 3, Heading::North, at(5, 5)).unwrap_err(),
        InvalidShipSpec::BlankName
    );
}

#[test]
fn rejects_lengths_outside_range() {
    assert_eq!(
        Ship::new("Raft", 0, Heading::North, at(5, 5)).unwrap_err(),
        InvalidShipSpec::LengthOutOfRange(0)
    );
    assert_eq!(
        Ship::new("Ark", MAX_SHIP_LENGTH + 1, Heading::North, at(5, 5)).unwrap_err(),
        InvalidShipSpec::LengthOutOfRange(6)
    );
    assert!(Ship::new("Dinghy", 1, Heading::North, at(0, 0)).is_ok());
    assert!(Ship::new("Carrier", 5, Heading::North, at(0, 9)).is_ok());
}

#[test]
fn hull_crossing_an_axis_is_still_built() {
    let ship = Ship::new("Carrier", 5, Heading::East, at(3, 5)).unwrap();
    assert_eq!(ship.len(), 5);
    assert_eq!(ship.positions(), &[at(3, 5), at(2, 5), at(1, 5), at(0, 5)]);
}

#[test]
fn hull_at_the_edge_of_usize_stops_early() {
    let west = Ship::new("Skiff", 2, Heading::West, at(usize::MAX, 0)).unwrap();
    assert_eq!(west.positions(), &[at(usize::MAX, 0)]);
    let south = Ship::new("Skiff", 2, Heading::South, at(0, usize::MAX)).unwrap();
    assert_eq!(south.positions(), &[at(0, usize::MAX)]);
}

#[test]
fn misses_take_no_lives() {
    let mut ship = Ship::new("Destroyer", 2, Heading::East, at(5, 5)).unwrap();
    assert!(!ship.is_hit(at(6, 5)));
    assert!(!ship.is_hit(at(5, 6)));
    assert_eq!(ship.remaining_lives(), 2);
}

#[test]
fn sinks_once_every_cell_is_hit() {
    let log = Rc::new(SunkLog::default());
    let mut ship = Ship::new("Destroyer", 2, Heading::East, at(5, 5)).unwrap();
    ship.add_ship_observer(Rc::downgrade(&log) as Weak<dyn ShipObserver>)
        .unwrap();

    assert!(ship.is_hit(at(5, 5)));
    assert_eq!(ship.remaining_lives(), 1);
    assert!(!ship.is_sunk());
    assert!(log.0.borrow().is_empty());

    assert!(ship.is_hit(at(4, 5)));
    assert_eq!(ship.remaining_lives(), 0);
    assert!(ship.is_sunk());
    assert_eq!(*log.0.borrow(), vec!["Destroyer".to_owned()]);
}

#[test]
fn repeated_hits_keep_taking_lives() {
    let log = Rc::new(SunkLog::default());
    let mut ship = Ship::new("Destroyer", 2, Heading::East, at(5, 5)).unwrap();
    ship.add_ship_observer(Rc::downgrade(&log) as Weak<dyn ShipObserver>)
        .unwrap();

    // The same cell twice sinks a two-cell ship.
    assert!(ship.is_hit(at(5, 5)));
    assert!(ship.is_hit(at(5, 5)));
    assert!(ship.is_sunk());
    assert_eq!(log.0.borrow().len(), 1);

    // Past zero the ship is no longer reported sunk and observers stay quiet.
    assert!(ship.is_hit(at(4, 5)));
    assert_eq!(ship.remaining_lives(), -1);
    assert!(!ship.is_sunk());
    assert_eq!(log.0.borrow().len(), 1);
}

#[test]
fn removed_and_dropped_observers_are_not_notified() {
    let removed = Rc::new(SunkLog::default());
    let dropped = Rc::new(SunkLog::default());
    let mut ship = Ship::new("Dinghy", 1, Heading::North, at(0, 0)).unwrap();
    let removed_handle = Rc::downgrade(&removed) as Weak<dyn ShipObserver>;
    ship.add_ship_observer(removed_handle.clone()).unwrap();
    ship.add_ship_observer(Rc::downgrade(&dropped) as Weak<dyn ShipObserver>)
        .unwrap();

    assert_eq!(ship.remove_ship_observer(&removed_handle), Ok(true));
    drop(dropped);
    assert!(ship.is_hit(at(0, 0)));
    assert!(removed.0.borrow().is_empty());
}

#[test]
fn unset_observers_are_rejected() {
    let mut ship = Ship::new("Dinghy", 1, Heading::North, at(0, 0)).unwrap();
    let unset = Weak::<SunkLog>::new() as Weak<dyn ShipObserver>;
    let err = ship.add_ship_observer(unset.clone()).unwrap_err();
    assert_eq!(err.argument(), "ship observer");
    assert!(ship.remove_ship_observer(&unset).is_err());
}

#[test]
fn overlap_is_any_shared_cell() {
    let a = Ship::new("Destroyer", 2, Heading::East, at(5, 5)).unwrap();
    let crossing = Ship::new("Cruiser", 3, Heading::North, at(4, 6)).unwrap();
    let beside = Ship::new("Cruiser", 3, Heading::North, at(6, 7)).unwrap();
    assert!(a.overlaps(&crossing));
    assert!(crossing.overlaps(&a));
    assert!(!a.overlaps(&beside));
    assert!(a.overlaps(&a));
}

#[test]
fn standard_fleet_classes() {
    let lengths: Vec<usize> = ShipClass::ALL.iter().map(|class| class.len()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);

    let carrier = ShipClass::Carrier.build(Heading::South, at(0, 0));
    assert_eq!(carrier.name(), "Carrier");
    assert_eq!(carrier.positions().len(), 5);
    assert_eq!(carrier.positions()[4], at(0, 4));
}
