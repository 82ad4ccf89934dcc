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
use thiserror::Error;

/// Reason a [`Ship`][super::Ship] could not be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidShipSpec {
    /// The name was empty or only whitespace.
    #[error("ship's name cannot be empty or whitespace")]
    BlankName,
    /// The length was outside the allowed range.
    #[error("ship's length must be between 1 and 5, got {0}")]
    LengthOutOfRange(usize),
}
