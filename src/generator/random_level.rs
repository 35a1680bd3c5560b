/*
random_level.rs

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

//! Generate a random level.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::dot::Dot;
use super::level::{self, BOTTOM_ROW_Y, PuzzleLevel, TOP_ROW_Y};
use super::palette::{DotColor, PALETTE_SIZE};
use super::spacing::{self, SpacedRow, SpacingOutcome};

/// Largest number of dots a generated level can have.
pub const MAX_DOT_COUNT: usize = PALETTE_SIZE;

/// Type of errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The number of dots is zero or larger than the palette.
    #[error("invalid dot count {requested}: expected a value between 1 and {max}")]
    InvalidDotCount { requested: usize, max: usize },
}

/// [`LevelGenerator`] object.
///
/// The object keeps some statistics about the last generated level.
pub struct LevelGenerator {
    /// Colors that the generator picks from.
    palette: Vec<DotColor>,

    /// How the top row positions of the last level were produced.
    pub top_outcome: Option<SpacingOutcome>,

    /// How the bottom row positions of the last level were produced.
    pub bottom_outcome: Option<SpacingOutcome>,

    /// Number of shuffles it took to get a bottom row that differs from the top row.
    pub shuffles: usize,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelGenerator {
    /// Create the object.
    pub fn new() -> Self {
        Self {
            palette: DotColor::palette(),
            top_outcome: None,
            bottom_outcome: None,
            shuffles: 0,
        }
    }

    /// Generate a random level with the thread-local random generator.
    ///
    /// See [`LevelGenerator::generate_with_rng`].
    pub fn generate(
        &mut self,
        dot_count: usize,
        tricky_shuffle: bool,
    ) -> Result<PuzzleLevel, GeneratorError> {
        self.generate_with_rng(&mut rand::rng(), dot_count, tricky_shuffle)
    }

    /// Generate a random level with `dot_count` dots in each row.
    ///
    /// When `tricky_shuffle` is set and there are more than two dots, the colors of the bottom
    /// row are never in the same order as the colors of the top row.
    ///
    /// # Errors
    ///
    /// The method returns an error if `dot_count` is zero or larger than [`PALETTE_SIZE`].
    pub fn generate_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        dot_count: usize,
        tricky_shuffle: bool,
    ) -> Result<PuzzleLevel, GeneratorError> {
        if dot_count == 0 || dot_count > self.palette.len() {
            return Err(GeneratorError::InvalidDotCount {
                requested: dot_count,
                max: self.palette.len(),
            });
        }
        self.top_outcome = None;
        self.bottom_outcome = None;
        self.shuffles = 0;

        // Choose the colors
        let mut colors: Vec<DotColor> = self.palette.clone();
        colors.shuffle(rng);
        colors.truncate(dot_count);

        let top_row: SpacedRow = spacing::spaced_random_xs(rng, dot_count);
        let bottom_row: SpacedRow = spacing::spaced_random_xs(rng, dot_count);
        self.top_outcome = Some(top_row.outcome);
        self.bottom_outcome = Some(bottom_row.outcome);

        // With one or two dots, the only other order might not exist, or would make the puzzle
        // obvious, so the bottom row keeps the top row order.
        let mut bottom_colors: Vec<DotColor> = colors.clone();
        if tricky_shuffle && dot_count > 2 {
            loop {
                bottom_colors.shuffle(rng);
                self.shuffles += 1;
                if bottom_colors != colors {
                    break;
                }
            }
        }

        let top_dots: Vec<Dot> =
            level::build_row(colors.iter().copied().zip(top_row.xs), TOP_ROW_Y);
        let bottom_dots: Vec<Dot> =
            level::build_row(bottom_colors.iter().copied().zip(bottom_row.xs), BOTTOM_ROW_Y);
        let correct_pairs: Vec<(usize, usize)> = level::pair_by_color(&top_dots, &bottom_dots);

        debug!(
            "Generated level: top = {colors:?}  bottom = {bottom_colors:?}  pairs = {correct_pairs:?}  shuffles = {}",
            self.shuffles
        );
        Ok(PuzzleLevel::from_parts(top_dots, bottom_dots, correct_pairs))
    }
}

/// Generate a random level with a new [`LevelGenerator`] object.
pub fn random_level(dot_count: usize, tricky_shuffle: bool) -> Result<PuzzleLevel, GeneratorError> {
    LevelGenerator::new().generate(dot_count, tricky_shuffle)
}
