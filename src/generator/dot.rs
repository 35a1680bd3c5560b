/*
dot.rs

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

//! Dots and their positions.
//!
//! Dot positions are relative to the puzzle area: both coordinates are in the unit square, so
//! that the same level can be drawn on any canvas size.
//! Use [`Position::to_canvas`] to get the position in pixels.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use super::palette::DotColor;

/// Next identifier to allocate to a [`Dot`].
static NEXT_DOT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque dot identifier, unique in the process.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DotId(u64);

impl DotId {
    fn next() -> Self {
        Self(NEXT_DOT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Two-dimensional coordinate.
///
/// For dots, the coordinate is relative (between 0 and 1). For gesture locations, the
/// coordinate is in pixels.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Convert a relative position to pixels on a canvas of the given size.
    pub fn to_canvas(&self, canvas: CanvasSize) -> Position {
        Position {
            x: self.x * canvas.width,
            y: self.y * canvas.height,
        }
    }
}

/// Size in pixels of the area where the puzzle is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A colored dot at a fixed position. Immutable after creation.
#[derive(Serialize, Debug, Copy, Clone)]
pub struct Dot {
    id: DotId,
    color: DotColor,
    position: Position,
}

/// Dots are identified by their ID only.
impl PartialEq for Dot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Dot {
    /// Create a [`Dot`] object with a new unique ID.
    pub fn new(color: DotColor, position: Position) -> Self {
        Self {
            id: DotId::next(),
            color,
            position,
        }
    }

    pub fn id(&self) -> DotId {
        self.id
    }

    pub fn color(&self) -> DotColor {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a: Dot = Dot::new(DotColor::Red, Position::new(0.5, 0.0));
        let b: Dot = Dot::new(DotColor::Red, Position::new(0.5, 0.0));
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        let copy: Dot = a;
        assert_eq!(a, copy);
    }

    #[test]
    fn canvas_conversion() {
        let p: Position = Position::new(0.25, 1.0).to_canvas(CanvasSize::new(400.0, 300.0));
        assert_eq!(p, Position::new(100.0, 300.0));
        assert_eq!(Position::new(0.0, 0.0).distance(&Position::new(3.0, 4.0)), 5.0);
    }
}
