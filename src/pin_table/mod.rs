/* Copyright (C) 2022 Antmicro
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */


use crate::error::Error;
use crate::scanner::MapDirective;

/// A port name which always gets constrained, regardless of the pin map contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry<'t> {
    pub name: &'t str,
    pub pin: u32,
}

const fn alias(name: &'static str, pin: u32) -> AliasEntry<'static> {
    AliasEntry { name, pin }
}

/* Board-level signals, emitted first and in this order */
const DEFAULT_ALIASES: &'static [AliasEntry<'static>] = &[
    alias("WF_LED",    31),
    alias("WF_CLK",    35),
    alias("WF_BUTTON", 42),
    alias("WF_NEO",    32),
    alias("WF_CPU1",   11),
    alias("WF_CPU2",   12),
    alias("WF_CPU3",   13),
    alias("WF_CPU4",   10),
];

/* Logical pin -> package pin */
const DEFAULT_PINS: &'static [u32] = &[
    17, 16, 14, 23, 20, 19, 18, 21,
    25, 26, 28, 27, 34, 35, 36, 37,
    40, 44, 46, 47, 45, 48,  2,  3,
     4,  9,  6, 43, 41, 39, 38, 15,
];

/// Translation from logical pin indices used in pin maps to physical package pins,
/// together with the list of aliases that are always emitted.
#[derive(Debug, Clone, Copy)]
pub struct PinTable<'t> {
    aliases: &'t [AliasEntry<'t>],
    pins: &'t [u32],
}

impl PinTable<'static> {
    pub const DEFAULT: Self = Self {
        aliases: DEFAULT_ALIASES,
        pins: DEFAULT_PINS,
    };
}

impl<'t> PinTable<'t> {
    pub const fn new(aliases: &'t [AliasEntry<'t>], pins: &'t [u32]) -> Self {
        Self { aliases, pins }
    }

    pub fn aliases(&self) -> &'t [AliasEntry<'t>] {
        self.aliases
    }

    /// Number of logical pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn physical_pin(&self, index: usize) -> Option<u32> {
        self.pins.get(index).copied()
    }

    /// Looks up the physical pin for a directive found at line `line` (1-based).
    /// Indices that do not fit the table, including ones too long to be represented
    /// as `usize`, are rejected.
    pub fn resolve(&self, directive: &MapDirective, line: usize) -> Result<u32, Error> {
        directive.index.parse::<usize>().ok()
            .and_then(|index| self.physical_pin(index))
            .ok_or_else(|| Error::IndexOutOfRange {
                line,
                name: directive.name.to_string(),
                index: directive.index.to_string(),
                len: self.len(),
            })
    }
}
