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
use std::str::FromStr;
use serde::Serialize;
use super::dictionary::WordRecord;

pub const MIN_WORD_LENGTH: usize = 3;
pub const HARD_MIN_WORD_LENGTH: usize = 4;

/// A puzzle with fewer targets than this gets topped up from the
/// rest of the sub-words.
pub const MIN_DESIRED_GRID_WORDS: usize = 5;

pub const UNLIMITED_SOLUTIONS: usize = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Difficulty {
    /// Practice mode. A single puzzle outside of a session.
    #[default]
    None,
    Easy,
    Medium,
    Hard,
}

/// Which root words may be chosen as the letters of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCriteria {
    pub lengths: &'static [usize],
    pub rarities: &'static [u32],
}

impl BaseCriteria {
    pub fn matches(&self, word: &WordRecord) -> bool {
        self.lengths.contains(&word.length())
            && self.rarities.contains(&word.rarity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown difficulty “{}”", self.0)
    }
}

impl std::error::Error for ParseDifficultyError {
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::None,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::None => "practice",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn base_criteria(self, is_last_puzzle: bool) -> BaseCriteria {
        match self {
            Difficulty::Easy => BaseCriteria {
                lengths: &[7],
                rarities: &[1],
            },
            Difficulty::Medium => BaseCriteria {
                lengths: &[7],
                rarities: &[1, 2, 3],
            },
            Difficulty::Hard => BaseCriteria {
                lengths: &[7],
                rarities: if is_last_puzzle { &[4] } else { &[3, 4] },
            },
            Difficulty::None => BaseCriteria {
                lengths: &[4, 5, 6, 7],
                rarities: &[1, 2, 3, 4],
            },
        }
    }

    pub fn min_sub_length(self) -> usize {
        match self {
            Difficulty::Hard => HARD_MIN_WORD_LENGTH,
            _ => MIN_WORD_LENGTH,
        }
    }

    pub fn sub_rarities(self) -> &'static [u32] {
        match self {
            Difficulty::Easy => &[1, 2],
            Difficulty::Medium => &[1, 2, 3],
            Difficulty::Hard => &[2, 3, 4],
            Difficulty::None => &[1, 2, 3, 4],
        }
    }

    pub fn max_solutions(self) -> usize {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Medium => 12,
            Difficulty::Hard => 15,
            Difficulty::None => UNLIMITED_SOLUTIONS,
        }
    }

    /// The precomputed number of sub-words that would be usable as
    /// targets at this difficulty.
    pub fn valid_sub_count(self, word: &WordRecord) -> u32 {
        match self {
            Difficulty::Easy => word.easy_valid_count,
            Difficulty::Medium => word.medium_valid_count,
            Difficulty::Hard => word.hard_valid_count,
            Difficulty::None => word.count_ge4,
        }
    }

    /// Number of puzzles in a session, or `None` for practice mode.
    pub fn puzzle_count(self) -> Option<usize> {
        match self {
            Difficulty::Easy => Some(5),
            Difficulty::Medium => Some(7),
            Difficulty::Hard => Some(10),
            Difficulty::None => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        match s.to_lowercase().as_str() {
            "none" | "practice" => Ok(Difficulty::None),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn criteria() {
        let easy = Difficulty::Easy.base_criteria(false);
        assert_eq!(easy.lengths, &[7]);
        assert_eq!(easy.rarities, &[1]);

        assert_eq!(
            Difficulty::Medium.base_criteria(true).rarities,
            &[1, 2, 3],
        );
        assert_eq!(Difficulty::Hard.base_criteria(false).rarities, &[3, 4]);
        assert_eq!(Difficulty::Hard.base_criteria(true).rarities, &[4]);

        let none = Difficulty::None.base_criteria(true);
        assert_eq!(none.lengths, &[4, 5, 6, 7]);
        assert_eq!(none.rarities, &[1, 2, 3, 4]);
    }

    #[test]
    fn matches() {
        let criteria = Difficulty::Hard.base_criteria(true);

        assert!(criteria.matches(&WordRecord::new("gardens", 4)));
        assert!(!criteria.matches(&WordRecord::new("gardens", 3)));
        assert!(!criteria.matches(&WordRecord::new("garden", 4)));
    }

    #[test]
    fn valid_sub_count() {
        let word = WordRecord {
            count_ge4: 1,
            easy_valid_count: 2,
            medium_valid_count: 3,
            hard_valid_count: 4,
            ..WordRecord::new("gardens", 1)
        };

        assert_eq!(Difficulty::None.valid_sub_count(&word), 1);
        assert_eq!(Difficulty::Easy.valid_sub_count(&word), 2);
        assert_eq!(Difficulty::Medium.valid_sub_count(&word), 3);
        assert_eq!(Difficulty::Hard.valid_sub_count(&word), 4);
    }

    #[test]
    fn parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.to_string().parse::<Difficulty>(),
                Ok(difficulty),
            );
        }

        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("none".parse::<Difficulty>(), Ok(Difficulty::None));
        assert_eq!(
            "extreme".parse::<Difficulty>().unwrap_err().to_string(),
            "unknown difficulty “extreme”",
        );
    }

    #[test]
    fn limits() {
        assert_eq!(Difficulty::Hard.min_sub_length(), 4);
        assert_eq!(Difficulty::Easy.min_sub_length(), 3);
        assert_eq!(Difficulty::None.max_solutions(), 999);
        assert_eq!(Difficulty::Medium.max_solutions(), 12);
        assert_eq!(Difficulty::Easy.puzzle_count(), Some(5));
        assert_eq!(Difficulty::Hard.puzzle_count(), Some(10));
        assert_eq!(Difficulty::None.puzzle_count(), None);
    }
}
