/*
game.rs

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

//! Manage the status of a level in progress.
//!
//! The [`GameSession`] object stores the lines that the player drew, the score, the number of
//! mistakes, and the level timer.
//! The level itself is never modified.

use chrono::{DateTime, Local};
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::config::{SNAP_RADIUS, WRONG_LINE_DISPLAY};
use crate::feedback::{Feedback, FeedbackNotifier};
use crate::generator::dot::{CanvasSize, Position};
use crate::generator::level::PuzzleLevel;

/// Correctness of a line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineStatus {
    Correct,
    Incorrect,

    /// The line is being drawn and has not been validated yet.
    Pending,
}

/// Line between a top dot and a bottom dot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawnLine {
    /// Index of the top dot.
    pub top: usize,

    /// Index of the bottom dot.
    pub bottom: usize,

    pub status: LineStatus,
}

/// Result of a connection attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The dots match.
    Correct,

    /// The dots match and all the pairs are now connected.
    Completed,

    /// The dots do not match. The line is removed after a short delay.
    Incorrect,

    /// A line already starts from that top dot. Nothing changed.
    AlreadyConnected,

    /// The gesture did not end close enough to a bottom dot. Nothing changed.
    NoTarget,

    /// A dot index is out of range. Nothing changed.
    InvalidIndex,
}

/// Summary of a solved level.
#[derive(Debug, Clone)]
pub struct LevelResult {
    pub score: usize,
    pub mistakes: usize,
    pub elapsed: Duration,
    pub completed_at: DateTime<Local>,
}

/// A line and the time it was drawn.
struct LineEntry {
    line: DrawnLine,
    drawn_at: Instant,
}

/// Manage the status of the level in progress.
pub struct GameSession {
    /// Level being played.
    level: PuzzleLevel,

    /// Lines drawn by the player, in drawing order.
    lines: Vec<LineEntry>,

    /// One point per correct line on the board. Undoing a correct line removes its point and
    /// clearing the board resets the score.
    score: usize,

    /// Number of incorrect connections.
    mistakes: usize,

    /// Time when the level started. Used to compute the level duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,

    /// The elapsed time when the level was solved. The timer does not run anymore after that.
    final_duration: Option<Duration>,

    /// Summary of the level, captured when it was solved.
    final_result: Option<LevelResult>,

    /// Receive the events for the player.
    notifier: Box<dyn FeedbackNotifier>,
}

impl GameSession {
    /// Create a [`GameSession`] object and start the timer.
    pub fn new(level: PuzzleLevel, notifier: Box<dyn FeedbackNotifier>) -> Self {
        debug!("New session for a level with {} dots", level.len());
        Self {
            level,
            lines: Vec::new(),
            score: 0,
            mistakes: 0,
            start_time: Instant::now(),
            pause_duration: None,
            final_duration: None,
            final_result: None,
            notifier,
        }
    }

    pub fn level(&self) -> &PuzzleLevel {
        &self.level
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Return the lines that are currently displayed, in drawing order.
    pub fn lines(&self) -> Vec<DrawnLine> {
        self.lines.iter().map(|e| e.line).collect()
    }

    /// Connect the given top dot to the given bottom dot.
    pub fn connect(&mut self, top: usize, bottom: usize) -> ConnectOutcome {
        if top >= self.level.len() || bottom >= self.level.len() {
            return ConnectOutcome::InvalidIndex;
        }

        // Only one line per top dot
        if self.lines.iter().any(|e| e.line.top == top) {
            debug!("Top dot {top} is already connected");
            return ConnectOutcome::AlreadyConnected;
        }

        if !self.level.is_correct_pair(top, bottom) {
            self.push_line(top, bottom, LineStatus::Incorrect);
            self.mistakes += 1;
            debug!("Wrong connection {top}-{bottom}: mistakes = {}", self.mistakes);
            self.notifier.notify(Feedback::Wrong);
            return ConnectOutcome::Incorrect;
        }

        self.push_line(top, bottom, LineStatus::Correct);
        self.score += 1;
        debug!("Correct connection {top}-{bottom}: score = {}", self.score);
        self.notifier.notify(Feedback::Correct);

        if self.is_complete() && self.final_result.is_none() {
            let elapsed: Duration = self.elapsed();
            self.final_duration = Some(elapsed);
            self.final_result = Some(LevelResult {
                score: self.score,
                mistakes: self.mistakes,
                elapsed,
                completed_at: Local::now(),
            });
            info!(
                "Level solved in {} with {} mistakes",
                self.time_string(),
                self.mistakes
            );
            self.notifier.notify(Feedback::Success);
            return ConnectOutcome::Completed;
        }
        ConnectOutcome::Correct
    }

    fn push_line(&mut self, top: usize, bottom: usize, status: LineStatus) {
        self.lines.push(LineEntry {
            line: DrawnLine { top, bottom, status },
            drawn_at: Instant::now(),
        });
    }

    /// Return the index of the bottom dot close enough to the given location (in pixels) to
    /// receive the line.
    fn snap_target(&self, end: Position, canvas: CanvasSize) -> Option<usize> {
        self.level
            .bottom_dots()
            .iter()
            .enumerate()
            .map(|(i, dot)| (i, dot.position().to_canvas(canvas).distance(&end)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|(_, distance)| *distance < SNAP_RADIUS)
            .map(|(i, _)| i)
    }

    /// Process the end of a drag gesture that started on the given top dot and ended at the
    /// given location, in pixels.
    pub fn drop_at(&mut self, top: usize, end: Position, canvas: CanvasSize) -> ConnectOutcome {
        match self.snap_target(end, canvas) {
            Some(bottom) => self.connect(top, bottom),
            None => ConnectOutcome::NoTarget,
        }
    }

    /// Return the pending line for a drag gesture in progress, if the pointer is over a
    /// bottom dot.
    pub fn preview(&self, top: usize, end: Position, canvas: CanvasSize) -> Option<DrawnLine> {
        if top >= self.level.len() {
            return None;
        }
        self.snap_target(end, canvas).map(|bottom| DrawnLine {
            top,
            bottom,
            status: LineStatus::Pending,
        })
    }

    /// Remove the incorrect lines that have been displayed long enough.
    ///
    /// Return the number of removed lines.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before: usize = self.lines.len();
        self.lines.retain(|e| {
            e.line.status != LineStatus::Incorrect
                || now.saturating_duration_since(e.drawn_at) < WRONG_LINE_DISPLAY
        });
        before - self.lines.len()
    }

    /// Remove the last line. Removing a correct line also removes its point.
    pub fn undo(&mut self) -> Option<DrawnLine> {
        let line: DrawnLine = self.lines.pop()?.line;
        if line.status == LineStatus::Correct {
            self.score = self.score.saturating_sub(1);
        }
        Some(line)
    }

    /// Remove all the lines and reset the score.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.score = 0;
    }

    /// Return the first pair that the player can connect now.
    ///
    /// Pairs whose top dot already has a line are skipped, including a top dot that is blocked
    /// by an incorrect line still on display.
    pub fn hint(&self) -> Option<(usize, usize)> {
        self.level
            .correct_pairs()
            .iter()
            .find(|(top, _)| !self.lines.iter().any(|e| e.line.top == *top))
            .copied()
    }

    /// Whether all the pairs are connected.
    pub fn is_complete(&self) -> bool {
        let correct: usize = self
            .lines
            .iter()
            .filter(|e| e.line.status == LineStatus::Correct)
            .count();
        !self.level.correct_pairs().is_empty() && correct == self.level.correct_pairs().len()
    }

    /// Return the summary of the level once it is solved. Later changes to the board do not
    /// alter it.
    pub fn result(&self) -> Option<LevelResult> {
        self.final_result.clone()
    }

    /// Pause the timer.
    pub fn pause(&mut self) {
        if self.pause_duration.is_none() {
            self.pause_duration = Some(self.start_time.elapsed());
        }
    }

    /// Resume the timer.
    pub fn resume(&mut self) {
        // Refresh the start time by removing the pause time
        if let Some(d) = self.pause_duration.take() {
            self.start_time += self.start_time.elapsed() - d;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_duration.is_some()
    }

    /// Return the time spent on the level.
    pub fn elapsed(&self) -> Duration {
        self.final_duration
            .or(self.pause_duration)
            .unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Return the time spent on the level in the `MM:SS` format.
    pub fn time_string(&self) -> String {
        format_duration(self.elapsed())
    }
}

/// Format a duration in the `MM:SS` format.
pub fn format_duration(duration: Duration) -> String {
    let seconds: u64 = duration.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Recorder;
    use crate::generator::palette::DotColor::*;

    /// Top: red blue green. Bottom: green red blue.
    fn rotated_level() -> PuzzleLevel {
        PuzzleLevel::from_rows(
            &[(Red, 0.2), (Blue, 0.5), (Green, 0.8)],
            &[(Green, 0.2), (Red, 0.5), (Blue, 0.8)],
        )
        .unwrap()
    }

    fn session() -> (GameSession, Recorder) {
        let recorder: Recorder = Recorder::default();
        (
            GameSession::new(rotated_level(), Box::new(recorder.clone())),
            recorder,
        )
    }

    #[test]
    fn correct_connection_scores() {
        let (mut game, recorder) = session();
        assert_eq!(game.connect(0, 1), ConnectOutcome::Correct);
        assert_eq!(game.score(), 1);
        assert_eq!(
            game.lines(),
            vec![DrawnLine {
                top: 0,
                bottom: 1,
                status: LineStatus::Correct
            }]
        );
        assert_eq!(*recorder.0.borrow(), vec![Feedback::Correct]);
    }

    #[test]
    fn incorrect_connection_expires() {
        let (mut game, recorder) = session();
        assert_eq!(game.connect(0, 0), ConnectOutcome::Incorrect);
        assert_eq!(game.score(), 0);
        assert_eq!(game.mistakes(), 1);
        assert_eq!(*recorder.0.borrow(), vec![Feedback::Wrong]);

        // The wrong line blocks the top dot until it is removed
        assert_eq!(game.connect(0, 1), ConnectOutcome::AlreadyConnected);
        assert_eq!(game.prune_expired(Instant::now()), 0);
        assert_eq!(
            game.prune_expired(Instant::now() + WRONG_LINE_DISPLAY + Duration::from_millis(1)),
            1
        );
        assert!(game.lines().is_empty());
        assert_eq!(game.connect(0, 1), ConnectOutcome::Correct);
    }

    #[test]
    fn prune_keeps_correct_lines() {
        let (mut game, _) = session();
        game.connect(1, 2);
        game.connect(0, 0);
        assert_eq!(game.prune_expired(Instant::now() + Duration::from_secs(5)), 1);
        assert_eq!(game.lines().len(), 1);
        assert_eq!(game.lines()[0].status, LineStatus::Correct);
    }

    #[test]
    fn completing_the_level() {
        let (mut game, recorder) = session();
        assert_eq!(game.connect(0, 1), ConnectOutcome::Correct);
        assert_eq!(game.connect(1, 2), ConnectOutcome::Correct);
        assert!(!game.is_complete());
        assert!(game.result().is_none());
        assert_eq!(game.connect(2, 0), ConnectOutcome::Completed);
        assert!(game.is_complete());
        assert_eq!(
            *recorder.0.borrow(),
            vec![
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Success
            ]
        );

        let result: LevelResult = game.result().unwrap();
        assert_eq!(result.score, 3);
        assert_eq!(result.mistakes, 0);

        // The timer is stopped
        let elapsed: Duration = game.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(game.elapsed(), elapsed);
    }

    #[test]
    fn success_is_reported_once() {
        let (mut game, recorder) = session();
        game.connect(0, 1);
        game.connect(1, 2);
        game.connect(2, 0);
        game.undo();
        assert_eq!(game.connect(2, 0), ConnectOutcome::Correct);
        let successes: usize = recorder
            .0
            .borrow()
            .iter()
            .filter(|f| **f == Feedback::Success)
            .count();
        assert_eq!(successes, 1);
    }

    #[test]
    fn invalid_indexes() {
        let (mut game, recorder) = session();
        assert_eq!(game.connect(3, 0), ConnectOutcome::InvalidIndex);
        assert_eq!(game.connect(0, 7), ConnectOutcome::InvalidIndex);
        assert!(game.lines().is_empty());
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn hint_skips_connected_pairs() {
        let (mut game, _) = session();
        assert_eq!(game.hint(), Some((0, 1)));
        game.connect(0, 1);
        assert_eq!(game.hint(), Some((1, 2)));
        game.connect(1, 2);
        game.connect(2, 0);
        assert_eq!(game.hint(), None);
    }

    #[test]
    fn undo_and_clear() {
        let (mut game, _) = session();
        assert_eq!(game.undo(), None);
        game.connect(0, 1);
        game.connect(1, 2);
        let removed: Option<DrawnLine> = game.undo();
        assert_eq!(removed.map(|l| l.top), Some(1));
        assert_eq!(game.score(), 1);

        // Undoing an incorrect line keeps the score
        game.connect(2, 2);
        game.undo();
        assert_eq!(game.score(), 1);
        game.clear();
        assert!(game.lines().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn reconnecting_after_undo_does_not_add_points() {
        let (mut game, _) = session();
        for _ in 0..5 {
            game.connect(0, 1);
            game.undo();
        }
        assert_eq!(game.score(), 0);
        game.connect(0, 1);
        game.connect(1, 2);
        assert_eq!(game.connect(2, 0), ConnectOutcome::Completed);
        assert_eq!(game.score(), game.level().correct_pairs().len());
        assert_eq!(game.result().map(|r| r.score), Some(3));
    }

    #[test]
    fn result_survives_clear() {
        let (mut game, _) = session();
        game.connect(0, 0);
        game.connect(1, 2);
        game.prune_expired(Instant::now() + Duration::from_secs(1));
        game.connect(0, 1);
        game.connect(2, 0);
        let result: LevelResult = game.result().unwrap();

        game.clear();
        assert_eq!(game.score(), 0);
        let after: LevelResult = game.result().unwrap();
        assert_eq!(after.score, 3);
        assert_eq!(after.mistakes, 1);
        assert_eq!(after.elapsed, result.elapsed);
        assert_eq!(after.completed_at, result.completed_at);
    }

    #[test]
    fn hint_skips_blocked_top_dot() {
        let (mut game, _) = session();
        assert_eq!(game.connect(0, 0), ConnectOutcome::Incorrect);
        let (top, bottom) = game.hint().unwrap();
        assert_eq!((top, bottom), (1, 2));
        assert_eq!(game.connect(top, bottom), ConnectOutcome::Correct);

        game.prune_expired(Instant::now() + Duration::from_secs(1));
        assert_eq!(game.hint(), Some((0, 1)));
    }

    #[test]
    fn drag_snaps_to_nearest_bottom_dot() {
        let (mut game, _) = session();
        let canvas: CanvasSize = CanvasSize::new(400.0, 400.0);

        // Red bottom dot is at (200, 400)
        let near_red: Position = Position::new(210.0, 390.0);
        assert_eq!(
            game.preview(0, near_red, canvas),
            Some(DrawnLine {
                top: 0,
                bottom: 1,
                status: LineStatus::Pending
            })
        );
        assert!(game.lines().is_empty());

        assert_eq!(
            game.drop_at(0, Position::new(200.0, 200.0), canvas),
            ConnectOutcome::NoTarget
        );
        assert_eq!(game.drop_at(0, near_red, canvas), ConnectOutcome::Correct);
        assert_eq!(game.preview(5, near_red, canvas), None);
    }

    #[test]
    fn pause_stops_the_timer() {
        let (mut game, _) = session();
        game.pause();
        assert!(game.is_paused());
        let paused: Duration = game.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(game.elapsed(), paused);
        game.resume();
        assert!(!game.is_paused());
        assert!(game.elapsed() >= paused);
    }

    #[test]
    fn duration_format() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
        assert_eq!(format_duration(Duration::from_secs(75)), "01:15");
        assert_eq!(format_duration(Duration::from_secs(3600)), "60:00");
    }
}
