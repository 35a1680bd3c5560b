/*
generator.rs

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

//! Manage levels and generate random levels.
//!
//! A [`level::PuzzleLevel`] object represents a level: a row of [`dot::Dot`] objects at the
//! top, a row at the bottom, and the table of the correct pairs.
//! Each dot has a color from the [`palette::DotColor`] palette.
//!
//! Levels come from two sources:
//!
//! * Hand-authored levels, built with [`level::PuzzleLevel::from_rows`] or
//!   [`level::PuzzleLevel::with_pairs`].
//!
//! * Random levels, built with a [`random_level::LevelGenerator`] object and its
//!   [`random_level::LevelGenerator::generate`] method.
//!   The horizontal position of the dots are computed by [`spacing::spaced_random_xs`], which
//!   falls back to evenly spaced dots when it cannot find a random layout.
//!
//! The [`catalog::CatalogSpec`] object lists the levels in the order they are played, and
//! builds them.

pub mod catalog;
pub mod dot;
pub mod level;
pub mod palette;
pub mod random_level;
pub mod spacing;
