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

use std::collections::HashSet;
use log::info;
use super::difficulty::Difficulty;
use super::sub_words::canonical_letters;

/// Base words and letter sets that have already been used in the
/// current session.
#[derive(Debug, Clone, Default)]
pub struct UsedWords {
    base_words: HashSet<String>,
    letter_sets: HashSet<String>,
}

impl UsedWords {
    pub fn new() -> UsedWords {
        UsedWords::default()
    }

    /// True if the word or any anagram of it has been used.
    pub fn contains(&self, word: &str) -> bool {
        self.base_words.contains(word)
            || self.letter_sets.contains(&canonical_letters(word))
    }

    pub fn insert(&mut self, word: &str) {
        self.base_words.insert(word.to_string());
        self.letter_sets.insert(canonical_letters(word));
    }

    pub fn clear(&mut self) {
        self.base_words.clear();
        self.letter_sets.clear();
    }

    pub fn base_word_count(&self) -> usize {
        self.base_words.len()
    }

    pub fn letter_set_count(&self) -> usize {
        self.letter_sets.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub difficulty: Difficulty,
    pub puzzle_count: usize,
    pub current_index: usize,
    pub score: u32,
    pub hint_points: u32,
    pub used: UsedWords,
    complete: bool,
}

/// Starts a run of puzzles. Practice mode is a single puzzle.
pub fn start_session(difficulty: Difficulty) -> SessionState {
    let puzzle_count = difficulty.puzzle_count().unwrap_or(1);

    info!("starting {} session of {} puzzles", difficulty, puzzle_count);

    SessionState {
        difficulty,
        puzzle_count,
        ..SessionState::default()
    }
}

impl SessionState {
    /// A state with no session running that keeps hold of the hint
    /// points.
    pub fn with_hint_points(hint_points: u32) -> SessionState {
        SessionState {
            hint_points,
            ..SessionState::default()
        }
    }

    pub fn is_practice(&self) -> bool {
        self.difficulty.puzzle_count().is_none()
    }

    pub fn is_last_puzzle(&self) -> bool {
        self.current_index + 1 >= self.puzzle_count
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Marks the session as complete if the current puzzle is the
    /// last one. Returns whether the session is complete.
    pub fn complete_if_done(&mut self) -> bool {
        if self.is_last_puzzle() && !self.complete {
            info!(
                "{} session complete with a score of {}",
                self.difficulty,
                self.score,
            );
            self.complete = true;
        }

        self.complete
    }

    /// Moves on to the next puzzle. Returns false instead if the
    /// session is over.
    pub fn advance(&mut self) -> bool {
        if self.complete_if_done() {
            return false;
        }

        self.current_index += 1;

        true
    }
}
