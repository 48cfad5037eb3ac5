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

use serde::Serialize;
use super::dictionary::WordRecord;
use super::puzzle::Puzzle;
use super::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GuessOutcome {
    TooShort,
    NewTarget {
        word_index: usize,
        points: u32,
    },
    RepeatTarget {
        word_index: usize,
    },
    NewBonus {
        word: String,
        hint_points: u32,
    },
    RepeatBonus {
        word: String,
    },
    Invalid,
}

/// Points for finding a target. Rare words are worth more.
pub fn word_score(word: &WordRecord) -> u32 {
    let base_score = word.length() as u32 * 10;
    let rarity_bonus = if word.rarity > 1 { word.rarity * 25 } else { 0 };

    base_score + rarity_bonus
}

/// Hint points for finding a bonus word of the given length.
pub fn bonus_hint_award(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 => 1,
        4 => 2,
        5 => 3,
        _ => 4,
    }
}

/// Works out what a traced word means and updates the found words,
/// score and hint points to match. The grid isn’t touched. Letters
/// of a new target only appear when their flights land.
pub fn resolve_guess(
    puzzle: &mut Puzzle,
    session: &mut SessionState,
    guess: &str,
    min_length: usize,
) -> GuessOutcome {
    if guess.chars().count() < min_length {
        return GuessOutcome::TooShort;
    }

    if let Some(word_index) = puzzle.target_index(guess) {
        if !puzzle.mark_target_found(word_index) {
            return GuessOutcome::RepeatTarget { word_index };
        }

        let points = word_score(&puzzle.targets()[word_index]);
        session.score += points;

        return GuessOutcome::NewTarget { word_index, points };
    }

    let Some(word) = puzzle.bonus_word(guess).map(|word| word.text.clone())
    else {
        return GuessOutcome::Invalid;
    };

    if puzzle.is_bonus_found(&word) {
        return GuessOutcome::RepeatBonus { word };
    }

    puzzle.mark_bonus_found(&word);

    let hint_points = bonus_hint_award(word.chars().count());
    session.hint_points += hint_points;

    GuessOutcome::NewBonus { word, hint_points }
}

/// Called whenever a letter lands in a row. If the row now spells its
/// target and the target wasn’t already found, it is marked as found
/// and the points are returned.
pub fn check_word_completion(
    puzzle: &mut Puzzle,
    session: &mut SessionState,
    row: usize,
) -> Option<u32> {
    if puzzle.is_target_found(row) || !puzzle.is_row_complete(row) {
        return None;
    }

    puzzle.mark_target_found(row);

    let points = word_score(&puzzle.targets()[row]);
    session.score += points;

    Some(points)
}
