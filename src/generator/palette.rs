/*
palette.rs

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

//! Dot colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of colors in the palette. This is also the maximum number of dots per row.
pub const PALETTE_SIZE: usize = 8;

/// Dot color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DotColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    Mint,
}

impl DotColor {
    /// Return all the colors of the palette, in declaration order.
    pub fn palette() -> Vec<DotColor> {
        (0..PALETTE_SIZE as u8)
            .filter_map(DotColor::from_repr)
            .collect()
    }

    /// Letter used to represent the color in the terminal.
    pub fn initial(&self) -> char {
        match self {
            DotColor::Red => 'R',
            DotColor::Blue => 'B',
            DotColor::Green => 'G',
            DotColor::Yellow => 'Y',
            DotColor::Orange => 'O',
            DotColor::Purple => 'P',
            DotColor::Pink => 'K',
            DotColor::Mint => 'M',
        }
    }
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            DotColor::Red => "red",
            DotColor::Blue => "blue",
            DotColor::Green => "green",
            DotColor::Yellow => "yellow",
            DotColor::Orange => "orange",
            DotColor::Purple => "purple",
            DotColor::Pink => "pink",
            DotColor::Mint => "mint",
        };
        write!(f, "{name}")
    }
}
