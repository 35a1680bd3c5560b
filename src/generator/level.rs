/*
level.rs

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

//! Puzzle level representation.
//!
//! A [`PuzzleLevel`] is made of a row of dots at the top of the puzzle area, a row of dots at
//! the bottom, and the pairing table that gives, for each top dot, the bottom dot it must be
//! connected to.
//! The pairing table only joins dots of the same color.
//!
//! Levels are immutable: the fields are private and there are no setters.

use serde::Serialize;
use thiserror::Error;

use super::dot::{Dot, Position};
use super::palette::DotColor;

/// Vertical position of the top row.
pub const TOP_ROW_Y: f64 = 0.0;

/// Vertical position of the bottom row.
pub const BOTTOM_ROW_Y: f64 = 1.0;

/// Type of errors when building a hand-authored level.
#[derive(Error, Debug, PartialEq)]
pub enum LevelError {
    /// The level has no dots.
    #[error("the level has no dots")]
    Empty,

    /// Both rows must have the same number of dots.
    #[error("the top row has {top} dots but the bottom row has {bottom}")]
    RowLengthMismatch { top: usize, bottom: usize },

    /// A horizontal position is not between 0 and 1.
    #[error("position {0} is outside of the puzzle area")]
    PositionOutOfRange(f64),

    /// A pair references a dot that does not exist.
    #[error("pair ({top}, {bottom}) references a dot outside of the level")]
    PairOutOfRange { top: usize, bottom: usize },

    /// A top dot is listed in several pairs.
    #[error("top dot {0} is paired more than once")]
    DuplicateTop(usize),

    /// A pair joins two dots that do not have the same color.
    #[error("pair ({top}, {bottom}) joins a {top_color} dot to a {bottom_color} dot")]
    ColorMismatch {
        top: usize,
        bottom: usize,
        top_color: DotColor,
        bottom_color: DotColor,
    },
}

/// Puzzle level.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PuzzleLevel {
    top_dots: Vec<Dot>,
    bottom_dots: Vec<Dot>,
    correct_pairs: Vec<(usize, usize)>,
}

impl PuzzleLevel {
    /// Create the level from its parts. The caller guarantees the level invariants.
    pub(super) fn from_parts(
        top_dots: Vec<Dot>,
        bottom_dots: Vec<Dot>,
        correct_pairs: Vec<(usize, usize)>,
    ) -> Self {
        debug_assert_eq!(top_dots.len(), bottom_dots.len());
        Self {
            top_dots,
            bottom_dots,
            correct_pairs,
        }
    }

    /// Build a hand-authored level from the color and horizontal position of each dot.
    ///
    /// Each top dot is paired with the first bottom dot that has the same color. Top dots
    /// without a bottom dot of the same color are left unpaired.
    pub fn from_rows(
        top: &[(DotColor, f64)],
        bottom: &[(DotColor, f64)],
    ) -> Result<Self, LevelError> {
        let (top_dots, bottom_dots) = Self::build_rows(top, bottom)?;
        let correct_pairs: Vec<(usize, usize)> = pair_by_color(&top_dots, &bottom_dots);
        Ok(Self::from_parts(top_dots, bottom_dots, correct_pairs))
    }

    /// Build a hand-authored level with an explicit pairing table.
    ///
    /// # Errors
    ///
    /// The method returns an error if a pair references a missing dot, if a top dot is
    /// paired twice, or if a pair joins dots of different colors.
    pub fn with_pairs(
        top: &[(DotColor, f64)],
        bottom: &[(DotColor, f64)],
        pairs: &[(usize, usize)],
    ) -> Result<Self, LevelError> {
        let (top_dots, bottom_dots) = Self::build_rows(top, bottom)?;
        let level: PuzzleLevel = Self::from_parts(top_dots, bottom_dots, pairs.to_vec());
        level.validate_pairs()?;
        Ok(level)
    }

    /// Create the dots of both rows.
    fn build_rows(
        top: &[(DotColor, f64)],
        bottom: &[(DotColor, f64)],
    ) -> Result<(Vec<Dot>, Vec<Dot>), LevelError> {
        if top.is_empty() {
            return Err(LevelError::Empty);
        }
        if top.len() != bottom.len() {
            return Err(LevelError::RowLengthMismatch {
                top: top.len(),
                bottom: bottom.len(),
            });
        }
        if let Some((_, x)) = top
            .iter()
            .chain(bottom.iter())
            .find(|(_, x)| !(0.0..=1.0).contains(x))
        {
            return Err(LevelError::PositionOutOfRange(*x));
        }
        Ok((
            build_row(top.iter().copied(), TOP_ROW_Y),
            build_row(bottom.iter().copied(), BOTTOM_ROW_Y),
        ))
    }

    /// Verify that the pairing table is a partial injective function between dots of the
    /// same color.
    fn validate_pairs(&self) -> Result<(), LevelError> {
        let mut seen: Vec<bool> = vec![false; self.top_dots.len()];
        for &(top, bottom) in &self.correct_pairs {
            let (Some(top_dot), Some(bottom_dot)) =
                (self.top_dots.get(top), self.bottom_dots.get(bottom))
            else {
                return Err(LevelError::PairOutOfRange { top, bottom });
            };
            if seen[top] {
                return Err(LevelError::DuplicateTop(top));
            }
            seen[top] = true;
            if top_dot.color() != bottom_dot.color() {
                return Err(LevelError::ColorMismatch {
                    top,
                    bottom,
                    top_color: top_dot.color(),
                    bottom_color: bottom_dot.color(),
                });
            }
        }
        Ok(())
    }

    /// Number of dots in each row.
    pub fn len(&self) -> usize {
        self.top_dots.len()
    }

    /// Whether the level has no dots. Only an invalid level can be empty.
    pub fn is_empty(&self) -> bool {
        self.top_dots.is_empty()
    }

    pub fn top_dots(&self) -> &[Dot] {
        &self.top_dots
    }

    pub fn bottom_dots(&self) -> &[Dot] {
        &self.bottom_dots
    }

    pub fn correct_pairs(&self) -> &[(usize, usize)] {
        &self.correct_pairs
    }

    /// Return the index of the bottom dot that the given top dot must be connected to.
    pub fn pair_for_top(&self, top: usize) -> Option<usize> {
        self.correct_pairs
            .iter()
            .find(|(t, _)| *t == top)
            .map(|(_, b)| *b)
    }

    /// Whether connecting the two dots is a correct move.
    pub fn is_correct_pair(&self, top: usize, bottom: usize) -> bool {
        self.correct_pairs.contains(&(top, bottom))
    }

    /// Colors of the top row, from left to right in row order.
    pub fn top_colors(&self) -> Vec<DotColor> {
        self.top_dots.iter().map(Dot::color).collect()
    }

    /// Colors of the bottom row, in row order.
    pub fn bottom_colors(&self) -> Vec<DotColor> {
        self.bottom_dots.iter().map(Dot::color).collect()
    }
}

/// Create a row of dots at the given vertical position.
pub(super) fn build_row<I>(dots: I, y: f64) -> Vec<Dot>
where
    I: IntoIterator<Item = (DotColor, f64)>,
{
    dots.into_iter()
        .map(|(color, x)| Dot::new(color, Position::new(x, y)))
        .collect()
}

/// For each top dot, find the first bottom dot with the same color.
pub(super) fn pair_by_color(top_dots: &[Dot], bottom_dots: &[Dot]) -> Vec<(usize, usize)> {
    top_dots
        .iter()
        .enumerate()
        .filter_map(|(i, top)| {
            bottom_dots
                .iter()
                .position(|bottom| bottom.color() == top.color())
                .map(|j| (i, j))
        })
        .collect()
}
