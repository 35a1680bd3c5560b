/*
config.rs

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

//! Application parameters and game tuning constants.

use std::time::Duration;

pub const APPLICATION_NAME: &str = "Dotpair";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

//
// Level generator
//

/// Lower bound of the horizontal position of a generated dot.
pub const MIN_X: f64 = 0.08;

/// Upper bound of the horizontal position of a generated dot.
pub const MAX_X: f64 = 0.92;

/// Minimum horizontal distance between two dots of the same row.
pub const MIN_SPACING: f64 = 0.18;

/// Number of random draws for a single dot before the attempt round is abandoned.
pub const MAX_DRAWS_PER_DOT: usize = 30;

/// Number of attempt rounds before falling back to evenly spaced dots.
pub const MAX_ROUNDS: usize = 200;

//
// Game session
//

/// Distance in pixels between the end of a drag gesture and a bottom dot under which the
/// gesture snaps to that dot.
pub const SNAP_RADIUS: f64 = 36.0;

/// How long an incorrect line stays visible before it is removed.
pub const WRONG_LINE_DISPLAY: Duration = Duration::from_millis(700);
