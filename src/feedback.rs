/*
feedback.rs

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

//! Player feedback.
//!
//! The game session reports the player's moves to a [`FeedbackNotifier`] object that the
//! front end provides.
//! A graphical front end would play a sound for each event. The terminal front end logs them.

use log::info;

/// Events reported to the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The player connected two matching dots.
    Correct,

    /// The player connected two dots that do not match.
    Wrong,

    /// The player solved the level.
    Success,
}

impl Feedback {
    /// Name of the sound associated with the event.
    pub fn sound_name(&self) -> &'static str {
        match self {
            Feedback::Correct => "ding",
            Feedback::Wrong => "buzz",
            Feedback::Success => "cheer",
        }
    }
}

/// Receive the feedback events.
pub trait FeedbackNotifier {
    fn notify(&mut self, feedback: Feedback);
}

/// Log the feedback events.
pub struct LogNotifier;

impl FeedbackNotifier for LogNotifier {
    fn notify(&mut self, feedback: Feedback) {
        info!("Feedback {feedback:?} ({}.wav)", feedback.sound_name());
    }
}

/// Ignore the feedback events.
pub struct Silent;

impl FeedbackNotifier for Silent {
    fn notify(&mut self, _feedback: Feedback) {}
}

/// Keep the feedback events so that tests can inspect them.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Recorder(pub std::rc::Rc<std::cell::RefCell<Vec<Feedback>>>);

#[cfg(test)]
impl FeedbackNotifier for Recorder {
    fn notify(&mut self, feedback: Feedback) {
        self.0.borrow_mut().push(feedback);
    }
}
