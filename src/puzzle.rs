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

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use super::dictionary::WordRecord;
use super::grid::{Grid, upper_letter};

/// Base word used when the dictionary has no usable roots.
pub const ERROR_BASE_WORD: &str = "ERROR";

/// Order of the rows in the grid: shortest first, then
/// alphabetically ignoring case.
pub fn grid_order(a: &WordRecord, b: &WordRecord) -> Ordering {
    a.length()
        .cmp(&b.length())
        .then_with(|| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
}

fn same_word(a: &str, b: &str) -> bool {
    a.chars().map(upper_letter).eq(b.chars().map(upper_letter))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusEntry {
    /// The word in uppercase if it has been found, otherwise a
    /// string of asterisks of the same length.
    pub text: String,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusGroup {
    pub length: usize,
    pub words: Vec<BonusEntry>,
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    base_word: String,
    wheel: Vec<char>,
    targets: Vec<WordRecord>,
    sub_word_pool: Vec<WordRecord>,
    bonus_pool: OnceCell<Vec<WordRecord>>,
    grid: Grid,
    found_targets: HashSet<String>,
    found_bonus_words: HashSet<String>,
}

impl Puzzle {
    pub fn new(
        base_word: &str,
        wheel: Vec<char>,
        mut targets: Vec<WordRecord>,
        sub_word_pool: Vec<WordRecord>,
    ) -> Puzzle {
        targets.sort_by(grid_order);

        let grid = Grid::new(targets.iter().map(WordRecord::length));

        Puzzle {
            base_word: base_word.to_string(),
            wheel: wheel.into_iter().map(upper_letter).collect(),
            targets,
            sub_word_pool,
            bonus_pool: OnceCell::new(),
            grid,
            found_targets: HashSet::new(),
            found_bonus_words: HashSet::new(),
        }
    }

    /// The placeholder puzzle used when no root word can be chosen.
    /// Every guess against it is invalid.
    pub fn empty() -> Puzzle {
        Puzzle::new(
            ERROR_BASE_WORD,
            ERROR_BASE_WORD.chars().collect(),
            Vec::new(),
            Vec::new(),
        )
    }

    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    pub fn wheel(&self) -> &[char] {
        &self.wheel
    }

    pub fn wheel_letter(&self, position: usize) -> Option<char> {
        self.wheel.get(position).copied()
    }

    /// The first position on the wheel showing `letter`.
    pub fn wheel_position(&self, letter: char) -> Option<usize> {
        let letter = upper_letter(letter);

        self.wheel.iter().position(|&ch| ch == letter)
    }

    pub fn scramble<R: Rng>(&mut self, rng: &mut R) {
        self.wheel.shuffle(rng);
    }

    /// The target words in grid order.
    pub fn targets(&self) -> &[WordRecord] {
        &self.targets
    }

    /// Every word that can be made from the base word, including the
    /// targets.
    pub fn sub_word_pool(&self) -> &[WordRecord] {
        &self.sub_word_pool
    }

    /// The sub-words that aren’t targets.
    pub fn bonus_pool(&self) -> &[WordRecord] {
        self.bonus_pool.get_or_init(|| {
            let mut seen = HashSet::new();

            self.sub_word_pool
                .iter()
                .filter(|word| {
                    !self.targets.iter().any(|target| target.text == word.text)
                })
                .filter(|word| seen.insert(word.text.as_str()))
                .cloned()
                .collect()
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn target_index(&self, guess: &str) -> Option<usize> {
        self.targets.iter().position(|word| same_word(&word.text, guess))
    }

    pub fn bonus_word(&self, guess: &str) -> Option<&WordRecord> {
        self.bonus_pool().iter().find(|word| same_word(&word.text, guess))
    }

    /// The letter that belongs in the given tile.
    pub fn target_letter(&self, row: usize, col: usize) -> Option<char> {
        self.targets.get(row)?.text.chars().nth(col).map(upper_letter)
    }

    pub fn is_target_found(&self, index: usize) -> bool {
        self.targets
            .get(index)
            .is_some_and(|word| self.found_targets.contains(&word.text))
    }

    /// Returns true if the target wasn’t already found.
    pub fn mark_target_found(&mut self, index: usize) -> bool {
        match self.targets.get(index) {
            Some(word) => self.found_targets.insert(word.text.clone()),
            None => false,
        }
    }

    pub fn is_bonus_found(&self, text: &str) -> bool {
        self.found_bonus_words.contains(text)
    }

    /// Returns true if the bonus word wasn’t already found.
    pub fn mark_bonus_found(&mut self, text: &str) -> bool {
        self.found_bonus_words.insert(text.to_string())
    }

    pub fn found_target_count(&self) -> usize {
        self.found_targets.len()
    }

    pub fn found_bonus_count(&self) -> usize {
        self.found_bonus_words.len()
    }

    /// The found targets in grid order.
    pub fn found_targets(&self) -> Vec<&str> {
        self.targets
            .iter()
            .filter(|word| self.found_targets.contains(&word.text))
            .map(|word| word.text.as_str())
            .collect()
    }

    pub fn found_bonus_words(&self) -> Vec<&str> {
        let mut words = self.found_bonus_words
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        words.sort_unstable();

        words
    }

    pub fn is_solved(&self) -> bool {
        !self.targets.is_empty()
            && self.found_targets.len() == self.targets.len()
    }

    pub fn unfound_rows(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        (0..self.targets.len()).filter(|&row| !self.is_target_found(row))
    }

    pub fn has_blank_in_unfound(&self) -> bool {
        self.unfound_rows().any(|row| self.grid.first_blank(row).is_some())
    }

    pub fn reveal(&mut self, row: usize, col: usize, letter: char) -> bool {
        self.grid.set(row, col, letter)
    }

    /// Whether every tile of the row is filled with the letters of
    /// its target.
    pub fn is_row_complete(&self, row: usize) -> bool {
        let Some(target) = self.targets.get(row)
        else {
            return false;
        };

        self.grid
            .row_word(row)
            .is_some_and(|word| same_word(&word, &target.text))
    }

    /// Details of a target to show in a popup. Only available once
    /// the word has been found.
    pub fn word_details(&self, index: usize) -> Option<&WordRecord> {
        if self.is_target_found(index) {
            self.targets.get(index)
        } else {
            None
        }
    }

    /// The bonus words grouped by length, shortest first.
    pub fn bonus_groups(&self) -> Vec<BonusGroup> {
        let mut words = self.bonus_pool().iter().collect::<Vec<_>>();

        words.sort_by(|a, b| {
            a.length().cmp(&b.length()).then_with(|| a.text.cmp(&b.text))
        });

        let mut groups = Vec::<BonusGroup>::new();

        for word in words {
            let found = self.found_bonus_words.contains(&word.text);
            let text = if found {
                word.text.chars().map(upper_letter).collect()
            } else {
                "*".repeat(word.length())
            };
            let entry = BonusEntry { text, found };
            let length = word.length();

            match groups.last_mut() {
                Some(group) if group.length == length => {
                    group.words.push(entry);
                },
                _ => groups.push(BonusGroup { length, words: vec![entry] }),
            }
        }

        groups
    }
}
