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

use std::collections::HashMap;
use serde::Serialize;

pub const MIN_ROOT_LENGTH: usize = 4;
pub const MAX_ROOT_LENGTH: usize = 7;

/// One row of the word list. The counters were precomputed by the
/// tool that built the list and are only read here.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordRecord {
    pub text: String,
    pub rarity: u32,
    pub part_of_speech: String,
    pub definition: String,
    pub example_sentence: String,
    pub avg_sub_length: f32,
    pub count_ge3: u32,
    pub count_ge4: u32,
    pub count_ge5: u32,
    pub easy_valid_count: u32,
    pub medium_valid_count: u32,
    pub hard_valid_count: u32,
}

impl WordRecord {
    /// Makes a record with no metadata apart from the rarity.
    pub fn new(text: &str, rarity: u32) -> WordRecord {
        WordRecord {
            text: text.to_lowercase(),
            rarity,
            ..Default::default()
        }
    }

    /// Number of letters in the word.
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<WordRecord>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Adds a word to the dictionary. Returns false and leaves the
    /// dictionary untouched if a word with the same text is already
    /// present.
    pub fn push(&mut self, record: WordRecord) -> bool {
        if self.index.contains_key(&record.text) {
            return false;
        }

        self.index.insert(record.text.clone(), self.words.len());
        self.words.push(record);

        true
    }

    pub fn get(&self, text: &str) -> Option<&WordRecord> {
        let index = match self.index.get(text) {
            Some(&index) => index,
            None => *self.index.get(&text.to_lowercase())?,
        };

        self.words.get(index)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words long enough and short enough to be used as the letters
    /// of a puzzle.
    pub fn roots(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.iter().filter(|word| {
            (MIN_ROOT_LENGTH..=MAX_ROOT_LENGTH).contains(&word.length())
        })
    }
}

impl FromIterator<WordRecord> for Dictionary {
    fn from_iter<I: IntoIterator<Item = WordRecord>>(iter: I) -> Dictionary {
        let mut dictionary = Dictionary::new();

        for record in iter {
            dictionary.push(record);
        }

        dictionary
    }
}
