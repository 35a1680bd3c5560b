/*
catalog.rs

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

//! Ordered list of the levels to play.
//!
//! A catalog mixes hand-authored levels with levels that are randomly generated when the
//! catalog is built.
//! The built-in catalog is returned by [`CatalogSpec::builtin`]. Developers can provide their
//! own catalog in a JSON file:
//!
//! ```json
//! {
//!   "levels": [
//!     {
//!       "fixed": {
//!         "top": [{"color": "red", "x": 0.2}, {"color": "blue", "x": 0.8}],
//!         "bottom": [{"color": "blue", "x": 0.3}, {"color": "red", "x": 0.7}]
//!       }
//!     },
//!     {"random": {"dot_count": 5}},
//!     {"random": {"dot_count": 3, "tricky": false}}
//!   ]
//! }
//! ```
//!
//! Fixed levels can also provide a `pairs` list. Otherwise each top dot is paired with the
//! first bottom dot of the same color.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use super::level::{LevelError, PuzzleLevel};
use super::palette::DotColor;
use super::random_level::{GeneratorError, LevelGenerator};

/// Type of errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read the catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse the catalog file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level {index}: {source}")]
    Level { index: usize, source: LevelError },

    #[error("level {index}: {source}")]
    Generator {
        index: usize,
        source: GeneratorError,
    },

    #[error("the catalog has no levels")]
    Empty,
}

/// Dot of a hand-authored level.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RowDot {
    pub color: DotColor,
    pub x: f64,
}

fn default_tricky() -> bool {
    true
}

/// Description of a level in the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LevelSpec {
    /// Hand-authored level.
    Fixed {
        top: Vec<RowDot>,
        bottom: Vec<RowDot>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pairs: Option<Vec<(usize, usize)>>,
    },

    /// Level generated when the catalog is built.
    Random {
        dot_count: usize,
        #[serde(default = "default_tricky")]
        tricky: bool,
    },
}

impl LevelSpec {
    fn fixed(top: &[(DotColor, f64)], bottom: &[(DotColor, f64)]) -> Self {
        let row = |dots: &[(DotColor, f64)]| -> Vec<RowDot> {
            dots.iter().map(|&(color, x)| RowDot { color, x }).collect()
        };
        LevelSpec::Fixed {
            top: row(top),
            bottom: row(bottom),
            pairs: None,
        }
    }

    /// Build the [`PuzzleLevel`] object. `index` is only used to report errors.
    fn build<R: Rng>(
        &self,
        index: usize,
        generator: &mut LevelGenerator,
        rng: &mut R,
    ) -> Result<PuzzleLevel, CatalogError> {
        match self {
            LevelSpec::Fixed { top, bottom, pairs } => {
                let top: Vec<(DotColor, f64)> = top.iter().map(|d| (d.color, d.x)).collect();
                let bottom: Vec<(DotColor, f64)> =
                    bottom.iter().map(|d| (d.color, d.x)).collect();
                match pairs {
                    Some(p) => PuzzleLevel::with_pairs(&top, &bottom, p),
                    None => PuzzleLevel::from_rows(&top, &bottom),
                }
                .map_err(|source| CatalogError::Level { index, source })
            }
            LevelSpec::Random { dot_count, tricky } => generator
                .generate_with_rng(rng, *dot_count, *tricky)
                .map_err(|source| CatalogError::Generator { index, source }),
        }
    }
}

/// Catalog description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogSpec {
    pub levels: Vec<LevelSpec>,
}

impl CatalogSpec {
    /// Return the built-in catalog: two hand-authored levels followed by three random levels of
    /// increasing size.
    pub fn builtin() -> Self {
        use DotColor::*;

        Self {
            levels: vec![
                LevelSpec::fixed(
                    &[(Red, 0.1), (Blue, 0.4), (Green, 0.7), (Yellow, 0.9)],
                    &[(Red, 0.1), (Blue, 0.4), (Green, 0.7), (Yellow, 0.9)],
                ),
                LevelSpec::fixed(
                    &[(Red, 0.2), (Blue, 0.5), (Green, 0.8)],
                    &[(Green, 0.2), (Red, 0.5), (Blue, 0.8)],
                ),
                LevelSpec::Random {
                    dot_count: 4,
                    tricky: true,
                },
                LevelSpec::Random {
                    dot_count: 5,
                    tricky: true,
                },
                LevelSpec::Random {
                    dot_count: 6,
                    tricky: true,
                },
            ],
        }
    }

    /// Read a catalog description from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading catalog file {path:?}");
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let spec: CatalogSpec = serde_json::from_reader(reader)?;
        Ok(spec)
    }

    /// Build the levels with the thread-local random generator.
    pub fn build(&self) -> Result<Vec<PuzzleLevel>, CatalogError> {
        self.build_with_rng(&mut rand::rng())
    }

    /// Build the levels, in order.
    ///
    /// # Errors
    ///
    /// The method returns an error if the catalog is empty or if a level cannot be built.
    pub fn build_with_rng<R: Rng>(&self, rng: &mut R) -> Result<Vec<PuzzleLevel>, CatalogError> {
        if self.levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut generator: LevelGenerator = LevelGenerator::new();
        let levels: Vec<PuzzleLevel> = self
            .levels
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.build(i + 1, &mut generator, &mut *rng))
            .collect::<Result<_, _>>()?;
        debug!("Catalog built with {} levels", levels.len());
        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn builtin_catalog() {
        let levels: Vec<PuzzleLevel> = CatalogSpec::builtin()
            .build_with_rng(&mut StdRng::seed_from_u64(1))
            .unwrap();
        let sizes: Vec<usize> = levels.iter().map(PuzzleLevel::len).collect();
        assert_eq!(sizes, vec![4, 3, 4, 5, 6]);
        assert_eq!(levels[0].correct_pairs(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(levels[1].correct_pairs(), &[(0, 1), (1, 2), (2, 0)]);
        for level in &levels[2..] {
            assert_ne!(level.top_colors(), level.bottom_colors());
        }
    }

    #[test]
    fn parse_json_catalog() {
        let json: &str = r#"{
            "levels": [
                {"fixed": {
                    "top": [{"color": "red", "x": 0.2}, {"color": "blue", "x": 0.8}],
                    "bottom": [{"color": "blue", "x": 0.3}, {"color": "red", "x": 0.7}]
                }},
                {"random": {"dot_count": 3}},
                {"random": {"dot_count": 2, "tricky": false}}
            ]
        }"#;
        let spec: CatalogSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.levels[1],
            LevelSpec::Random {
                dot_count: 3,
                tricky: true
            }
        );
        let levels: Vec<PuzzleLevel> = spec.build().unwrap();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].correct_pairs(), &[(0, 1), (1, 0)]);
    }

    #[test]
    fn reports_the_failing_level() {
        let spec: CatalogSpec = CatalogSpec {
            levels: vec![
                LevelSpec::Random {
                    dot_count: 3,
                    tricky: true,
                },
                LevelSpec::Random {
                    dot_count: 12,
                    tricky: true,
                },
            ],
        };
        match spec.build() {
            Err(CatalogError::Generator { index, .. }) => assert_eq!(index, 2),
            other => panic!("unexpected result {other:?}"),
        }

        let spec: CatalogSpec = CatalogSpec {
            levels: vec![LevelSpec::Fixed {
                top: vec![RowDot {
                    color: DotColor::Red,
                    x: 0.5,
                }],
                bottom: vec![RowDot {
                    color: DotColor::Blue,
                    x: 0.5,
                }],
                pairs: Some(vec![(0, 0)]),
            }],
        };
        assert!(matches!(
            spec.build(),
            Err(CatalogError::Level {
                index: 1,
                source: LevelError::ColorMismatch { .. }
            })
        ));
    }

    #[test]
    fn empty_catalog() {
        let spec: CatalogSpec = CatalogSpec { levels: Vec::new() };
        assert!(matches!(spec.build(), Err(CatalogError::Empty)));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            CatalogSpec::load(Path::new("/nonexistent/dotpair-catalog.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
