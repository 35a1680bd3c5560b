/*
play.rs

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

//! Play the levels from a terminal.
//!
//! The player types one command per line. Dots are numbered from 1, from left to right.
//!
//! ```text
//! Level 2/5   Score: 0   Time: 00:04
//!            1:R               2:B               3:G
//!
//!            1:G               2:R               3:B
//! > 1 2
//! ```

use log::debug;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::config::{APPLICATION_NAME, VERSION};
use crate::feedback::LogNotifier;
use crate::game::{ConnectOutcome, GameSession, LevelResult, LineStatus, format_duration};
use crate::generator::dot::Dot;
use crate::generator::level::PuzzleLevel;
use crate::level_progress::LevelProgress;

/// Number of characters of a rendered row.
const ROW_WIDTH: usize = 64;

const HELP: &str = "Commands:
  T B    connect top dot T to bottom dot B (for example: 1 3)
  u      undo the last line
  x      clear all the lines (resets the score)
  h      show a hint
  n      go to the next level
  r      restart from the first level
  p      pause or resume the timer
  s      show the board
  q      quit";

/// Render a row of dots as `index:color` labels placed according to their horizontal
/// position.
pub fn render_row(dots: &[Dot]) -> String {
    let mut row: Vec<char> = vec![' '; ROW_WIDTH];
    for (i, dot) in dots.iter().enumerate() {
        let label: String = format!("{}:{}", i + 1, dot.color().initial());
        let max_start: usize = ROW_WIDTH - label.len();
        let start: usize = ((dot.position().x * max_start as f64).round() as usize).min(max_start);
        for (offset, c) in label.chars().enumerate() {
            row[start + offset] = c;
        }
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Render both rows of a level.
pub fn render_level(level: &PuzzleLevel) -> String {
    format!(
        "{}\n\n{}",
        render_row(level.top_dots()),
        render_row(level.bottom_dots())
    )
}

/// Render the board of the level in progress.
fn render_board(game: &GameSession, progress: &LevelProgress) -> String {
    let mut board: String = format!(
        "Level {}/{}   Score: {}   Time: {}{}\n{}",
        progress.current_index() + 1,
        progress.level_count(),
        game.score(),
        game.time_string(),
        if game.is_paused() { " (paused)" } else { "" },
        render_level(game.level())
    );
    let lines: Vec<String> = game
        .lines()
        .iter()
        .map(|l| {
            let status: &str = match l.status {
                LineStatus::Correct => "ok",
                LineStatus::Incorrect => "wrong",
                LineStatus::Pending => "?",
            };
            format!("{}-{} {status}", l.top + 1, l.bottom + 1)
        })
        .collect();
    if !lines.is_empty() {
        board.push_str(&format!("\nLines: {}", lines.join(", ")));
    }
    board
}

/// Parse a `T B` connection command. Dot numbers start at 1.
fn parse_connection(command: &str) -> Option<(usize, usize)> {
    let mut words = command.split_whitespace();
    let top: usize = words.next()?.parse().ok()?;
    let bottom: usize = words.next()?.parse().ok()?;
    if words.next().is_some() || top == 0 || bottom == 0 {
        return None;
    }
    Some((top - 1, bottom - 1))
}

fn new_session(progress: &LevelProgress) -> GameSession {
    GameSession::new(progress.current_level().clone(), Box::new(LogNotifier))
}

fn print_result<W: Write>(out: &mut W, result: &LevelResult) -> io::Result<()> {
    writeln!(
        out,
        "Level solved at {} in {} with a score of {} and {} mistakes.",
        result.completed_at.format("%H:%M:%S"),
        format_duration(result.elapsed),
        result.score,
        result.mistakes
    )
}

/// Run the game loop until the player quits or the input ends.
pub fn run<R: BufRead, W: Write>(
    mut progress: LevelProgress,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{APPLICATION_NAME} {VERSION}. Type ? for help.")?;
    let mut game: GameSession = new_session(&progress);
    writeln!(out, "{}", render_board(&game, &progress))?;

    for line in input.lines() {
        let line: String = line?;
        let command: &str = line.trim();
        game.prune_expired(Instant::now());
        debug!("Command: {command:?}");

        match command {
            "" => continue,
            "q" => break,
            "?" => writeln!(out, "{HELP}")?,
            "s" => writeln!(out, "{}", render_board(&game, &progress))?,
            "u" => match game.undo() {
                Some(l) => writeln!(out, "Removed line {}-{}.", l.top + 1, l.bottom + 1)?,
                None => writeln!(out, "Nothing to undo.")?,
            },
            "x" => {
                game.clear();
                writeln!(out, "Board cleared.")?;
            }
            "h" => match game.hint() {
                Some((top, bottom)) => {
                    writeln!(out, "Hint: connect {} to {}.", top + 1, bottom + 1)?
                }
                None => writeln!(out, "No hint: all the pairs are connected.")?,
            },
            "p" => {
                if game.is_paused() {
                    game.resume();
                    writeln!(out, "Resumed.")?;
                } else {
                    game.pause();
                    writeln!(out, "Paused.")?;
                }
            }
            "n" => {
                if progress.advance() {
                    game = new_session(&progress);
                    writeln!(out, "{}", render_board(&game, &progress))?;
                } else {
                    writeln!(out, "This is the last level.")?;
                }
            }
            "r" => {
                progress.reset();
                game = new_session(&progress);
                writeln!(out, "{}", render_board(&game, &progress))?;
            }
            _ => {
                let Some((top, bottom)) = parse_connection(command) else {
                    writeln!(out, "Unknown command {command:?}. Type ? for help.")?;
                    continue;
                };
                match game.connect(top, bottom) {
                    ConnectOutcome::Correct => writeln!(out, "Correct!")?,
                    ConnectOutcome::Incorrect => writeln!(out, "Wrong pair.")?,
                    ConnectOutcome::AlreadyConnected => {
                        writeln!(out, "Top dot {} is already connected.", top + 1)?
                    }
                    ConnectOutcome::InvalidIndex | ConnectOutcome::NoTarget => {
                        writeln!(out, "No such dot.")?
                    }
                    ConnectOutcome::Completed => {
                        if let Some(result) = game.result() {
                            print_result(out, &result)?;
                        }
                        if progress.is_last() {
                            writeln!(out, "All the levels are solved!")?;
                        } else {
                            writeln!(out, "Type n for the next level.")?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::catalog::CatalogSpec;
    use crate::generator::palette::DotColor::*;
    use std::io::Cursor;

    fn play(script: &str) -> String {
        let progress: LevelProgress =
            LevelProgress::new(CatalogSpec::builtin().build().unwrap()).unwrap();
        let mut out: Vec<u8> = Vec::new();
        run(progress, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rows_follow_positions() {
        let level: PuzzleLevel =
            PuzzleLevel::from_rows(&[(Red, 0.0), (Mint, 1.0)], &[(Mint, 0.5), (Red, 0.9)])
                .unwrap();
        let top: String = render_row(level.top_dots());
        assert!(top.starts_with("1:R"));
        assert!(top.ends_with("2:M"));
        assert_eq!(top.len(), ROW_WIDTH);
        let bottom: String = render_row(level.bottom_dots());
        assert_eq!(bottom.find("1:M"), Some(31));
    }

    #[test]
    fn connection_parsing() {
        assert_eq!(parse_connection("1 3"), Some((0, 2)));
        assert_eq!(parse_connection(" 2   1 "), Some((1, 0)));
        assert_eq!(parse_connection("0 1"), None);
        assert_eq!(parse_connection("1"), None);
        assert_eq!(parse_connection("1 2 3"), None);
        assert_eq!(parse_connection("a b"), None);
    }

    #[test]
    fn solve_first_level_and_move_on() {
        let output: String = play("1 1\n2 2\n3 3\n4 4\nn\nq\n");
        assert!(output.contains("Level 1/5"));
        assert!(output.contains("Level solved"));
        assert!(output.contains("Type n for the next level."));
        assert!(output.contains("Level 2/5"));
    }

    #[test]
    fn wrong_pair_and_hint() {
        let output: String = play("1 2\nh\nu\nu\nfoo\n");
        assert!(output.contains("Wrong pair."));
        assert!(output.contains("Hint: connect 2 to 2."));
        assert!(output.contains("Removed line 1-2."));
        assert!(output.contains("Nothing to undo."));
        assert!(output.contains("Unknown command \"foo\""));
    }

    #[test]
    fn last_level_does_not_wrap() {
        let output: String = play("n\nn\nn\nn\nn\nr\n");
        assert!(output.contains("Level 5/5"));
        assert!(output.contains("This is the last level."));
        assert_eq!(output.matches("Level 1/5").count(), 2);
    }
}
