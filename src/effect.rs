// Word Wheel – A letter wheel word game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use serde::Serialize;
use super::game::Screen;
use super::hint::{HintError, HintKind};

/// Something that happened in the game that the host might want to
/// play a sound or an animation for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Effect {
    ScreenChanged {
        screen: Screen,
    },
    PuzzleStarted {
        number: usize,
        count: usize,
    },
    LetterSelected {
        position: usize,
    },
    TraceUndone {
        position: usize,
    },
    GuessTooShort,
    TargetFound {
        word_index: usize,
        points: u32,
    },
    TargetRepeated {
        word_index: usize,
    },
    BonusFound {
        word: String,
        hint_points: u32,
    },
    BonusRepeated {
        word: String,
    },
    InvalidGuess {
        guess: String,
    },
    LetterLanded {
        row: usize,
        col: usize,
        letter: char,
    },
    /// A row was completed by letters landing rather than by a guess.
    WordCompleted {
        word_index: usize,
        points: u32,
    },
    HintUsed {
        kind: HintKind,
        cost: u32,
        letters: usize,
    },
    HintRejected {
        kind: HintKind,
        error: HintError,
    },
    Scrambled,
    PuzzleSolved {
        score: u32,
    },
    SessionComplete {
        score: u32,
    },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Effect::ScreenChanged { screen } => write!(f, "{}", screen),
            Effect::PuzzleStarted { number, count } => {
                write!(f, "puzzle {} of {}", number, count)
            },
            Effect::LetterSelected { .. } | Effect::TraceUndone { .. } => {
                Ok(())
            },
            Effect::GuessTooShort => write!(f, "too short"),
            Effect::TargetFound { points, .. } => {
                write!(f, "found a word! +{} points", points)
            },
            Effect::TargetRepeated { .. } => write!(f, "already found"),
            Effect::BonusFound { word, hint_points } => {
                write!(
                    f,
                    "bonus word “{}”! +{} hint points",
                    word.to_uppercase(),
                    hint_points,
                )
            },
            Effect::BonusRepeated { word } => {
                write!(f, "bonus word “{}” already found", word.to_uppercase())
            },
            Effect::InvalidGuess { guess } => {
                write!(f, "“{}” isn’t a word here", guess)
            },
            Effect::LetterLanded { .. } => Ok(()),
            Effect::WordCompleted { points, .. } => {
                write!(f, "word completed! +{} points", points)
            },
            Effect::HintUsed { kind, cost, letters } => {
                write!(
                    f,
                    "{} hint revealed {} letters for {} points",
                    kind.name(),
                    letters,
                    cost,
                )
            },
            Effect::HintRejected { error, .. } => write!(f, "{}", error),
            Effect::Scrambled => write!(f, "scrambled"),
            Effect::PuzzleSolved { score } => {
                write!(f, "puzzle solved! score: {}", score)
            },
            Effect::SessionComplete { score } => {
                write!(f, "session complete! final score: {}", score)
            },
        }
    }
}
