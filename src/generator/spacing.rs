/*
spacing.rs

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

//! Generate random horizontal positions for a row of dots.
//!
//! Positions are strictly between [`MIN_X`] and [`MAX_X`] and two positions are never closer than
//! [`MIN_SPACING`].
//! Each dot gets at most [`MAX_DRAWS_PER_DOT`] random draws. If none of them is far enough from
//! the dots already placed, the round is abandoned and a new round starts from an empty row.
//! After [`MAX_ROUNDS`] rounds, the dots are evenly spaced instead, so that the generation
//! always terminates.
//! With the default parameters, six dots or more do not fit in the interval and always end in
//! the even spacing.

use log::debug;
use rand::Rng;

use crate::config::{MAX_DRAWS_PER_DOT, MAX_ROUNDS, MAX_X, MIN_SPACING, MIN_X};

/// How the positions of a row were produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpacingOutcome {
    /// The positions are random and respect the minimum spacing.
    Random,

    /// No random row could be built; the positions are evenly spaced.
    EvenFallback,
}

/// Sorted horizontal positions of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacedRow {
    pub xs: Vec<f64>,
    pub outcome: SpacingOutcome,
}

/// Generate `n` sorted horizontal positions.
pub fn spaced_random_xs<R: Rng>(rng: &mut R, n: usize) -> SpacedRow {
    'rounds: for round in 0..MAX_ROUNDS {
        let mut xs: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            match draw_candidate(rng, &xs) {
                Some(x) => xs.push(x),
                None => continue 'rounds,
            }
        }
        xs.sort_by(f64::total_cmp);
        debug!("Placed {n} dots in round {}", round + 1);
        return SpacedRow {
            xs,
            outcome: SpacingOutcome::Random,
        };
    }

    debug!("Cannot place {n} dots randomly after {MAX_ROUNDS} rounds: using even spacing");
    SpacedRow {
        xs: even_xs(n),
        outcome: SpacingOutcome::EvenFallback,
    }
}

/// Draw a position that is far enough from the already placed positions, or return None if
/// all the draws collide.
///
/// The range excludes [`MAX_X`] but can return [`MIN_X`]. Such a draw counts as a collision.
fn draw_candidate<R: Rng>(rng: &mut R, placed: &[f64]) -> Option<f64> {
    (0..MAX_DRAWS_PER_DOT)
        .map(|_| rng.random_range(MIN_X..MAX_X))
        .find(|candidate| {
            *candidate > MIN_X && placed.iter().all(|x| (x - candidate).abs() >= MIN_SPACING)
        })
}

/// Evenly spaced positions: `i / (n + 1)` for `i` in `1..=n`.
pub fn even_xs(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64 / (n + 1) as f64).collect()
}

/// Smallest distance between two consecutive positions of a sorted row, or None if the row has
/// less than two positions.
pub fn min_gap(xs: &[f64]) -> Option<f64> {
    xs.windows(2).map(|w| w[1] - w[0]).min_by(f64::total_cmp)
}
