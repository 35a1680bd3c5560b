/*
level_progress.rs

Copyright 2025 Hervé Quatremain

This file is part of Dotpair.

Dotpair is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Dotpair is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Dotpair. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Progression through the levels of the catalog.
//!
//! The player starts at the first level and moves forward one level at a time.
//! There is no wraparound: once on the last level, moving forward does nothing.

use log::debug;

use crate::generator::catalog::CatalogError;
use crate::generator::level::PuzzleLevel;

/// Current position in the list of levels.
pub struct LevelProgress {
    /// Levels in playing order. Never empty.
    levels: Vec<PuzzleLevel>,

    /// Index of the current level.
    current: usize,
}

impl LevelProgress {
    /// Create a [`LevelProgress`] object positioned on the first level.
    pub fn new(levels: Vec<PuzzleLevel>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { levels, current: 0 })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_level(&self) -> &PuzzleLevel {
        &self.levels[self.current]
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.levels.len()
    }

    /// Move to the next level. Return `false` if already on the last level.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            debug!("Already on the last level ({})", self.current + 1);
            return false;
        }
        self.current += 1;
        debug!("Moving to level {}", self.current + 1);
        true
    }

    /// Go back to the first level.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
