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
use super::dictionary::{Dictionary, WordRecord};

fn lowercase_chars(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().flat_map(char::to_lowercase)
}

/// How many times each letter appears in a word, ignoring case.
#[derive(Debug, Clone, Default)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    pub fn new(word: &str) -> LetterCounts {
        let mut counts = HashMap::new();
        let mut total = 0;

        for ch in lowercase_chars(word) {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }

        LetterCounts { counts, total }
    }

    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Returns whether `word` can be spelled using at most these
    /// letters.
    pub fn can_spell(&self, word: &str) -> bool {
        let mut used = HashMap::<char, usize>::new();

        for ch in lowercase_chars(word) {
            let count = used.entry(ch).or_insert(0);
            *count += 1;

            if *count > self.get(ch) {
                return false;
            }
        }

        true
    }
}

fn is_candidate(candidate: &str, base: &str, base_length: usize) -> bool {
    let length = lowercase_chars(candidate).count();

    length > 0
        && length <= base_length
        && !lowercase_chars(candidate).eq(lowercase_chars(base))
}

/// Returns whether `candidate` can be made from the letters of
/// `base`. The base word itself doesn’t count.
pub fn is_sub_word(candidate: &str, base: &str) -> bool {
    let counts = LetterCounts::new(base);

    is_candidate(candidate, base, counts.total) && counts.can_spell(candidate)
}

/// All of the words in the dictionary that can be made from the
/// letters of `base`, in dictionary order.
pub fn sub_words<'a>(
    base: &str,
    dictionary: &'a Dictionary,
) -> Vec<&'a WordRecord> {
    if base.is_empty() {
        return Vec::new();
    }

    let counts = LetterCounts::new(base);

    dictionary.words()
        .iter()
        .filter(|word| {
            is_candidate(&word.text, base, counts.total)
                && counts.can_spell(&word.text)
        })
        .collect()
}

/// The lowercase letters of the word in sorted order. Two words are
/// anagrams of each other if their canonical letters are the same.
pub fn canonical_letters(word: &str) -> String {
    let mut letters = lowercase_chars(word).collect::<Vec<char>>();

    letters.sort_unstable();

    letters.into_iter().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_dictionary(words: &[(&str, u32)]) -> Dictionary {
        words.iter()
            .map(|&(text, rarity)| WordRecord::new(text, rarity))
            .collect()
    }

    #[test]
    fn sub_word() {
        assert!(is_sub_word("den", "garden"));
        assert!(is_sub_word("DEN", "garden"));
        assert!(is_sub_word("gear", "Garden"));
        assert!(is_sub_word("danger", "garden"));
        assert!(!is_sub_word("garden", "garden"));
        assert!(!is_sub_word("GARDEN", "garden"));
        assert!(!is_sub_word("gardens", "garden"));
        assert!(!is_sub_word("dread", "garden"));
        assert!(!is_sub_word("odd", "garden"));
        assert!(!is_sub_word("", "garden"));
        assert!(!is_sub_word("den", ""));
    }

    #[test]
    fn garden() {
        let dictionary = make_dictionary(&[
            ("gear", 1),
            ("den", 1),
            ("rag", 2),
            ("garden", 1),
            ("dread", 1),
            ("ranged", 3),
        ]);

        let words = sub_words("garden", &dictionary)
            .into_iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>();

        assert_eq!(&words, &["gear", "den", "rag", "ranged"]);
    }

    #[test]
    fn matches_is_sub_word() {
        let dictionary = make_dictionary(&[
            ("a", 1),
            ("aa", 1),
            ("ab", 1),
            ("ba", 1),
            ("bab", 1),
            ("abba", 1),
            ("baba", 1),
            ("abbaa", 1),
            ("c", 1),
        ]);

        for base in ["abba", "ab", "aab", "c", "ABBA", "x", ""] {
            let mut expected = dictionary.words()
                .iter()
                .filter(|word| is_sub_word(&word.text, base))
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>();
            expected.sort_unstable();

            let mut actual = sub_words(base, &dictionary)
                .into_iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>();
            actual.sort_unstable();

            assert_eq!(expected, actual, "base “{}”", base);

            let again = sub_words(base, &dictionary)
                .into_iter()
                .map(|word| word.text.as_str())
                .collect::<Vec<_>>();
            let mut again_sorted = again.clone();
            again_sorted.sort_unstable();

            assert_eq!(actual, again_sorted);
        }
    }

    #[test]
    fn counts() {
        let counts = LetterCounts::new("Banana");

        assert_eq!(counts.get('a'), 3);
        assert_eq!(counts.get('n'), 2);
        assert_eq!(counts.get('b'), 1);
        assert_eq!(counts.get('B'), 0);
        assert_eq!(counts.get('z'), 0);

        assert!(counts.can_spell("nab"));
        assert!(counts.can_spell("BANANA"));
        assert!(!counts.can_spell("bananas"));
        assert!(counts.can_spell(""));
    }

    #[test]
    fn canonical() {
        assert_eq!(canonical_letters("Garden"), "adegnr");
        assert_eq!(canonical_letters("danger"), "adegnr");
        assert_eq!(canonical_letters(""), "");
    }
}
