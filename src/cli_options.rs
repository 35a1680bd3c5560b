/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the levels of the built-in catalog:
//!
//! ```text
//! $ dotpair ls
//! Level 1: 4 dots  top = red blue green yellow  bottom = red blue green yellow
//! Level 2: 3 dots  top = red blue green  bottom = green red blue
//! ...
//! ```
//!
//! Generate two random levels with five dots, in JSON, reproducibly:
//!
//! ```text
//! $ dotpair --seed 12 generate -n 5 -c 2 --json
//! ```
//!
//! Play the levels of a custom catalog:
//!
//! ```text
//! $ dotpair --catalog my_levels.json play
//! ```

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::COPYRIGHT_NOTICE;
use crate::generator::catalog::{CatalogError, CatalogSpec};
use crate::generator::level::PuzzleLevel;
use crate::generator::palette::DotColor;
use crate::generator::random_level::LevelGenerator;
use crate::generator::spacing::SpacingOutcome;
use crate::level_progress::LevelProgress;
use crate::play;

/// Connect the colored dots of the top row to the dots of the same color in the bottom row.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON file that describes the levels, instead of the built-in levels
    #[arg(short = 'C', long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for the random generator, to reproduce the same levels
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the levels
    Ls,

    /// Generate random levels
    Generate {
        /// Number of dots in each row
        #[arg(short = 'n', long, default_value_t = 4)]
        dots: usize,

        /// Number of levels to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Keep the colors of the bottom row in the same order as the top row
        #[arg(long, default_value_t = false)]
        no_tricky: bool,

        /// Print the levels in JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,

        /// Print some statistics after generating the levels
        #[arg(long, default_value_t = false)]
        summary: bool,
    },

    /// Play the levels in the terminal
    Play,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Random seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let ret: Result<(), Box<dyn Error>> = match args.command {
        Command::Ls => list_levels(args.catalog.as_deref(), &mut rng),
        Command::Generate {
            dots,
            count,
            no_tricky,
            json,
            summary,
        } => generate(&mut rng, dots, count, !no_tricky, json, summary),
        Command::Play => load_levels(args.catalog.as_deref(), &mut rng)
            .and_then(LevelProgress::new)
            .map_err(Box::<dyn Error>::from)
            .and_then(|progress| {
                play::run(progress, io::stdin().lock(), &mut io::stdout().lock())
                    .map_err(Box::<dyn Error>::from)
            }),
    };

    match ret {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Build the levels from the given catalog file, or from the built-in catalog.
fn load_levels(path: Option<&Path>, rng: &mut StdRng) -> Result<Vec<PuzzleLevel>, CatalogError> {
    let spec: CatalogSpec = match path {
        Some(p) => CatalogSpec::load(p)?,
        None => CatalogSpec::builtin(),
    };
    spec.build_with_rng(rng)
}

/// Print a line for each level.
fn list_levels(path: Option<&Path>, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    for (i, level) in load_levels(path, rng)?.iter().enumerate() {
        println!(
            "Level {}: {} dots  top = {}  bottom = {}",
            i + 1,
            level.len(),
            color_names(&level.top_colors()),
            color_names(&level.bottom_colors())
        );
    }
    Ok(())
}

fn color_names(colors: &[DotColor]) -> String {
    colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Generate and print random levels.
fn generate(
    rng: &mut StdRng,
    dots: usize,
    count: usize,
    tricky: bool,
    json: bool,
    summary: bool,
) -> Result<(), Box<dyn Error>> {
    let start: Instant = Instant::now();
    let mut generator: LevelGenerator = LevelGenerator::new();
    let mut levels: Vec<PuzzleLevel> = Vec::with_capacity(count);
    let mut fallbacks: usize = 0;
    let mut shuffles: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");
        levels.push(generator.generate_with_rng(rng, dots, tricky)?);
        fallbacks += [generator.top_outcome, generator.bottom_outcome]
            .iter()
            .filter(|o| **o == Some(SpacingOutcome::EvenFallback))
            .count();
        shuffles += generator.shuffles;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&levels)?);
    } else {
        for (i, level) in levels.iter().enumerate() {
            println!("Level {}", i + 1);
            println!("{}", play::render_level(level));
            let pairs: Vec<String> = level
                .correct_pairs()
                .iter()
                .map(|(t, b)| format!("{}-{}", t + 1, b + 1))
                .collect();
            println!("Pairs: {}\n", pairs.join(" "));
        }
    }

    if summary {
        eprintln!(
            "
        total time = {}s
evenly spaced rows = {}/{}
  average shuffles = {}",
            start.elapsed().as_secs_f32(),
            fallbacks,
            count * 2,
            shuffles as f32 / count.max(1) as f32
        );
    }
    Ok(())
}
