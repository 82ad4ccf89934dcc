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
//! Console presentation for the `seabattle` rules engine.
//!
//! [`ConsoleBoardDrawer`] prints a board from its grid snapshot and
//! [`SunkenShipReporter`] announces ships as they sink. Both only consume what the core
//! exposes to the outside: copy-on-read snapshots and observer callbacks.

pub use self::{
    drawer::{marker, BoardDrawer, ConsoleBoardDrawer},
    reporter::SunkenShipReporter,
};

mod drawer;
mod reporter;
