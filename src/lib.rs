/*
lib.rs

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

//! Dotpair: connect the colored dots of the top row to the dots of the same color in the
//! bottom row.
//!
//! The crate provides the level model and the random level generator ([`generator`]), the
//! progression through the levels ([`level_progress`]), the status of a level in progress
//! ([`game`]), and a terminal front end ([`play`], [`cli_options`]).

pub mod cli_options;
pub mod config;
pub mod feedback;
pub mod game;
pub mod generator;
pub mod level_progress;
pub mod play;
