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

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use super::dictionary::{Dictionary, WordRecord};
use super::difficulty::{Difficulty, MIN_DESIRED_GRID_WORDS};
use super::puzzle::Puzzle;
use super::session::{SessionState, UsedWords};
use super::sub_words::sub_words;

/// How well a root word suits the current puzzle. The first tier
/// with any candidates is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    /// Meets the difficulty criteria and has enough valid sub-words.
    Ideal,
    /// Meets the difficulty criteria.
    Fallback,
    /// Hasn’t been used yet in this session.
    Broad,
    /// Anything at all.
    LastResort,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Tier::Ideal => "ideal",
            Tier::Fallback => "fallback",
            Tier::Broad => "broad",
            Tier::LastResort => "last resort",
        };

        write!(f, "{}", name)
    }
}

/// The best tier that the root word can be chosen from, or `None` if
/// it or an anagram of it has already been used.
pub fn classify_root(
    word: &WordRecord,
    difficulty: Difficulty,
    is_last_puzzle: bool,
    used: &UsedWords,
) -> Option<Tier> {
    if used.contains(&word.text) {
        None
    } else if !difficulty.base_criteria(is_last_puzzle).matches(word) {
        Some(Tier::Broad)
    } else if difficulty.valid_sub_count(word) as usize
        >= MIN_DESIRED_GRID_WORDS
    {
        Some(Tier::Ideal)
    } else {
        Some(Tier::Fallback)
    }
}

pub fn choose_base_word<'a, R: Rng>(
    dictionary: &'a Dictionary,
    difficulty: Difficulty,
    is_last_puzzle: bool,
    used: &UsedWords,
    rng: &mut R,
) -> Option<(&'a WordRecord, Tier)> {
    let mut roots = dictionary.roots().collect::<Vec<_>>();

    roots.shuffle(rng);

    let mut ideal = Vec::new();
    let mut fallback = Vec::new();
    let mut broad = Vec::new();

    for &root in roots.iter() {
        match classify_root(root, difficulty, is_last_puzzle, used) {
            Some(Tier::Ideal) => ideal.push(root),
            Some(Tier::Fallback) => fallback.push(root),
            Some(Tier::Broad) => broad.push(root),
            Some(Tier::LastResort) | None => (),
        }
    }

    debug!(
        "{} roots: {} ideal, {} fallback, {} broad",
        roots.len(),
        ideal.len(),
        fallback.len(),
        broad.len(),
    );

    for (tier, candidates) in [
        (Tier::Ideal, ideal),
        (Tier::Fallback, fallback),
        (Tier::Broad, broad),
    ] {
        if let Some(&word) = candidates.choose(rng) {
            return Some((word, tier));
        }
    }

    roots.first().map(|&word| (word, Tier::LastResort))
}

fn selection_order(a: &WordRecord, b: &WordRecord) -> Ordering {
    b.length()
        .cmp(&a.length())
        .then(a.rarity.cmp(&b.rarity))
        .then_with(|| a.text.cmp(&b.text))
}

/// Picks the target words for a base word. Returns the targets and
/// the whole pool of sub-words that the bonus words are taken from.
pub fn solution_set(
    base_word: &str,
    dictionary: &Dictionary,
    difficulty: Difficulty,
) -> (Vec<WordRecord>, Vec<WordRecord>) {
    let pool = sub_words(base_word, dictionary);
    let min_length = difficulty.min_sub_length();
    let max_solutions = difficulty.max_solutions();
    let rarities = difficulty.sub_rarities();

    let mut seen = HashSet::new();

    let mut chosen = pool.iter()
        .copied()
        .filter(|word| {
            word.length() >= min_length && rarities.contains(&word.rarity)
        })
        .filter(|word| seen.insert(word.text.as_str()))
        .collect::<Vec<_>>();

    chosen.sort_by(|a, b| selection_order(a, b));
    chosen.truncate(max_solutions);

    let mut targets = chosen.into_iter().cloned().collect::<Vec<_>>();

    let base_text = base_word.to_lowercase();

    if !targets.iter().any(|word| word.text == base_text) {
        let base_record = dictionary.get(&base_text)
            .cloned()
            .unwrap_or_else(|| WordRecord::new(&base_text, 0));

        if base_record.length() >= min_length {
            targets.push(base_record);
        }
    }

    let grid_target = MIN_DESIRED_GRID_WORDS.min(max_solutions);

    if targets.len() < grid_target {
        let mut existing = targets.iter()
            .map(|word| word.text.clone())
            .collect::<HashSet<_>>();

        let mut extra = pool.iter()
            .copied()
            .filter(|word| {
                word.length() >= min_length && !existing.contains(&word.text)
            })
            .collect::<Vec<_>>();

        extra.sort_by(|a, b| selection_order(a, b));

        for word in extra {
            if targets.len() >= grid_target {
                break;
            }

            if existing.insert(word.text.clone()) {
                targets.push(word.clone());
            }
        }
    }

    let pool = pool.into_iter().cloned().collect();

    (targets, pool)
}

/// Makes the next puzzle of the session. The chosen base word is
/// marked as used straight away.
pub fn generate<R: Rng>(
    dictionary: &Dictionary,
    session: &mut SessionState,
    rng: &mut R,
) -> Puzzle {
    let difficulty = session.difficulty;

    let Some((root, tier)) = choose_base_word(
        dictionary,
        difficulty,
        session.is_last_puzzle(),
        &session.used,
        rng,
    )
    else {
        warn!("the dictionary has no root words");
        return Puzzle::empty();
    };

    if tier != Tier::Ideal {
        warn!(
            "no ideal {} root word left, using “{}” from the {} tier",
            difficulty,
            root.text,
            tier,
        );
    }

    session.used.insert(&root.text);

    let mut wheel = root.text.chars().collect::<Vec<_>>();
    wheel.shuffle(rng);

    let (targets, pool) = solution_set(&root.text, dictionary, difficulty);

    info!(
        "puzzle {}/{}: “{}” with {} targets and {} sub-words",
        session.current_index + 1,
        session.puzzle_count,
        root.text,
        targets.len(),
        pool.len(),
    );

    Puzzle::new(&root.text, wheel, targets, pool)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::session::start_session;
    use crate::sub_words::{canonical_letters, is_sub_word};

    fn root(text: &str, rarity: u32, valid: u32) -> WordRecord {
        WordRecord {
            count_ge4: valid,
            easy_valid_count: valid,
            medium_valid_count: valid,
            hard_valid_count: valid,
            ..WordRecord::new(text, rarity)
        }
    }

    fn garden_dictionary() -> Dictionary {
        [
            ("garden", 1),
            ("gear", 1),
            ("den", 1),
            ("rag", 2),
            ("red", 1),
            ("range", 1),
            ("anger", 2),
            ("dare", 3),
            ("danger", 1),
            ("ranged", 4),
            ("and", 1),
            ("ad", 1),
        ]
            .into_iter()
            .map(|(text, rarity)| WordRecord::new(text, rarity))
            .collect()
    }

    fn texts(words: &[WordRecord]) -> Vec<&str> {
        words.iter().map(|word| word.text.as_str()).collect()
    }

    fn check_puzzle(puzzle: &Puzzle) {
        assert!(!puzzle.targets().is_empty());

        for target in puzzle.targets() {
            assert!(
                target.text == puzzle.base_word()
                    || is_sub_word(&target.text, puzzle.base_word()),
                "“{}” is not made from “{}”",
                target.text,
                puzzle.base_word(),
            );
        }

        for bonus in puzzle.bonus_pool() {
            assert!(puzzle.targets().iter().all(|t| t.text != bonus.text));
        }

        assert_eq!(
            canonical_letters(&puzzle.wheel().iter().collect::<String>()),
            canonical_letters(puzzle.base_word()),
        );
    }

    #[test]
    fn easy_solutions() {
        let dictionary = garden_dictionary();

        let (targets, pool) = solution_set(
            "garden",
            &dictionary,
            Difficulty::Easy,
        );

        assert_eq!(
            texts(&targets),
            vec![
                "danger", "range", "anger", "gear", "and", "den", "red",
                "garden",
            ],
        );
        assert_eq!(pool.len(), 11);
        assert!(pool.iter().all(|word| word.text != "garden"));

        let puzzle = Puzzle::new(
            "garden",
            "garden".chars().collect(),
            targets,
            pool,
        );

        assert_eq!(
            texts(puzzle.targets()),
            vec![
                "and", "den", "red", "gear", "anger", "range", "danger",
                "garden",
            ],
        );
        assert_eq!(
            texts(puzzle.bonus_pool()),
            vec!["rag", "dare", "ranged", "ad"],
        );
        check_puzzle(&puzzle);
    }

    #[test]
    fn hard_backfill() {
        let dictionary = garden_dictionary();

        let (targets, _) = solution_set(
            "garden",
            &dictionary,
            Difficulty::Hard,
        );

        assert_eq!(
            texts(&targets),
            vec!["ranged", "anger", "dare", "garden", "danger"],
        );
    }

    #[test]
    fn unlimited_solutions() {
        let dictionary = garden_dictionary();

        let (targets, _) = solution_set(
            "garden",
            &dictionary,
            Difficulty::None,
        );

        // Everything except “ad”, plus the base word
        assert_eq!(targets.len(), 11);
    }

    #[test]
    fn synthetic_base_word() {
        let dictionary = garden_dictionary();

        let (targets, pool) = solution_set(
            "Regand",
            &dictionary,
            Difficulty::Easy,
        );

        let base = targets.iter().find(|word| word.text == "regand").unwrap();
        assert_eq!(base.rarity, 0);
        assert_eq!(base.definition, "");

        // The real word is an anagram so it is a sub-word of the fake one
        assert!(pool.iter().any(|word| word.text == "garden"));
    }

    #[test]
    fn session_has_no_repeats() {
        let mut dictionary = garden_dictionary();

        for word in [
            "gardens", "dangers", "strange", "garnets", "parties",
            "pirates", "reading", "trading", "painter",
        ] {
            dictionary.push(root(word, 1, 6));
        }

        let mut rng = StdRng::seed_from_u64(7);
        let mut session = start_session(Difficulty::Easy);
        let mut letter_sets = HashSet::new();

        loop {
            let puzzle = generate(&dictionary, &mut session, &mut rng);

            check_puzzle(&puzzle);
            assert_eq!(puzzle.base_word().chars().count(), 7);
            assert!(letter_sets.insert(canonical_letters(puzzle.base_word())));

            if !session.advance() {
                break;
            }
        }

        assert_eq!(letter_sets.len(), 5);
        assert_eq!(session.used.letter_set_count(), 5);
    }

    #[test]
    fn hard_last_puzzle() {
        let mut dictionary = Dictionary::new();
        dictionary.push(root("gardens", 3, 9));
        dictionary.push(root("strange", 4, 9));

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = start_session(Difficulty::Hard);
            session.current_index = session.puzzle_count - 1;

            let puzzle = generate(&dictionary, &mut session, &mut rng);

            assert_eq!(puzzle.base_word(), "strange");
        }
    }

    #[test]
    fn tiers() {
        let mut dictionary = Dictionary::new();
        dictionary.push(root("gardens", 1, 2));
        dictionary.push(root("gear", 1, 0));

        let mut rng = StdRng::seed_from_u64(1);
        let mut used = UsedWords::new();

        let (word, tier) = choose_base_word(
            &dictionary,
            Difficulty::Easy,
            false,
            &used,
            &mut rng,
        ).unwrap();

        assert_eq!(word.text, "gardens");
        assert_eq!(tier, Tier::Fallback);

        used.insert("gardens");

        let (word, tier) = choose_base_word(
            &dictionary,
            Difficulty::Easy,
            false,
            &used,
            &mut rng,
        ).unwrap();

        assert_eq!(word.text, "gear");
        assert_eq!(tier, Tier::Broad);

        used.insert("gear");

        let (_, tier) = choose_base_word(
            &dictionary,
            Difficulty::Easy,
            false,
            &used,
            &mut rng,
        ).unwrap();

        assert_eq!(tier, Tier::LastResort);
    }

    #[test]
    fn classify() {
        let mut used = UsedWords::new();
        let gardens = root("gardens", 1, 5);

        assert_eq!(
            classify_root(&gardens, Difficulty::Easy, false, &used),
            Some(Tier::Ideal),
        );
        assert_eq!(
            classify_root(&gardens, Difficulty::Hard, false, &used),
            Some(Tier::Broad),
        );
        let few_words = root("gardens", 1, 4);

        assert_eq!(
            classify_root(&few_words, Difficulty::Easy, false, &used),
            Some(Tier::Fallback),
        );

        used.insert("dangers");

        assert_eq!(
            classify_root(&gardens, Difficulty::Easy, false, &used),
            None,
        );
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = ["den", "rag"]
            .into_iter()
            .map(|word| WordRecord::new(word, 1))
            .collect::<Dictionary>();

        let mut rng = StdRng::seed_from_u64(1);
        let mut session = start_session(Difficulty::None);

        let puzzle = generate(&dictionary, &mut session, &mut rng);

        assert_eq!(puzzle.base_word(), "ERROR");
        assert!(puzzle.targets().is_empty());
        assert!(puzzle.bonus_pool().is_empty());
    }
}
