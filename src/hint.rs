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
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use super::config::HintCosts;
use super::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum HintKind {
    /// The first blank of the first word that hasn’t been found.
    RevealFirst,
    /// A random blank in every word that hasn’t been found.
    RevealRandom,
    /// Every blank of the last word that hasn’t been found.
    RevealLast,
    /// The first blank of every word that hasn’t been found.
    RevealFirstOfEach,
}

impl HintKind {
    pub const ALL: [HintKind; 4] = [
        HintKind::RevealFirst,
        HintKind::RevealRandom,
        HintKind::RevealLast,
        HintKind::RevealFirstOfEach,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HintKind::RevealFirst => "first",
            HintKind::RevealRandom => "random",
            HintKind::RevealLast => "last",
            HintKind::RevealFirstOfEach => "each",
        }
    }

    pub fn from_name(name: &str) -> Option<HintKind> {
        HintKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A letter that a hint will put in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HintError {
    PuzzleSolved,
    NothingToReveal,
    NotEnoughPoints {
        cost: u32,
        available: u32,
    },
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HintError::PuzzleSolved => write!(f, "the puzzle is already solved"),
            HintError::NothingToReveal => {
                write!(f, "there are no letters left to reveal")
            },
            HintError::NotEnoughPoints { cost, available } => {
                write!(
                    f,
                    "the hint costs {} points but only {} are available",
                    cost,
                    available,
                )
            },
        }
    }
}

fn reveal(puzzle: &Puzzle, row: usize, col: usize) -> Option<Reveal> {
    puzzle.target_letter(row, col).map(|letter| Reveal { row, col, letter })
}

/// Chooses which tiles a hint would fill in without changing
/// anything.
pub fn select_reveals<R: Rng>(
    puzzle: &Puzzle,
    kind: HintKind,
    rng: &mut R,
) -> Vec<Reveal> {
    let grid = puzzle.grid();

    match kind {
        HintKind::RevealFirst => {
            puzzle.unfound_rows()
                .find_map(|row| {
                    grid.first_blank(row).and_then(|col| reveal(puzzle, row, col))
                })
                .into_iter()
                .collect()
        },
        HintKind::RevealRandom => {
            puzzle.unfound_rows()
                .filter_map(|row| {
                    grid.blanks(row)
                        .choose(rng)
                        .and_then(|&col| reveal(puzzle, row, col))
                })
                .collect()
        },
        HintKind::RevealLast => {
            puzzle.unfound_rows()
                .rev()
                .map(|row| {
                    grid.blanks(row)
                        .into_iter()
                        .filter_map(|col| reveal(puzzle, row, col))
                        .collect::<Vec<_>>()
                })
                .find(|reveals| !reveals.is_empty())
                .unwrap_or_default()
        },
        HintKind::RevealFirstOfEach => {
            puzzle.unfound_rows()
                .filter_map(|row| {
                    grid.first_blank(row).and_then(|col| reveal(puzzle, row, col))
                })
                .collect()
        },
    }
}

/// Pays for a hint and returns the tiles to reveal. Nothing is
/// deducted if the hint is refused.
pub fn activate_hint<R: Rng>(
    puzzle: &Puzzle,
    kind: HintKind,
    costs: &HintCosts,
    hint_points: &mut u32,
    rng: &mut R,
) -> Result<Vec<Reveal>, HintError> {
    if puzzle.is_solved() {
        return Err(HintError::PuzzleSolved);
    }

    if !puzzle.has_blank_in_unfound() {
        return Err(HintError::NothingToReveal);
    }

    let cost = costs.cost(kind);

    if *hint_points < cost {
        return Err(HintError::NotEnoughPoints {
            cost,
            available: *hint_points,
        });
    }

    let reveals = select_reveals(puzzle, kind, rng);

    if reveals.is_empty() {
        return Err(HintError::NothingToReveal);
    }

    *hint_points -= cost;

    Ok(reveals)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::dictionary::WordRecord;

    fn make_puzzle() -> Puzzle {
        Puzzle::new(
            "garden",
            "garden".chars().collect(),
            ["gear", "den", "and"]
                .into_iter()
                .map(|word| WordRecord::new(word, 1))
                .collect(),
            Vec::new(),
        )
    }

    fn positions(reveals: &[Reveal]) -> Vec<(usize, usize, char)> {
        reveals.iter().map(|r| (r.row, r.col, r.letter)).collect()
    }

    #[test]
    fn reveal_first() {
        let mut puzzle = make_puzzle();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealFirst, &mut rng)),
            vec![(0, 0, 'A')],
        );

        puzzle.reveal(0, 0, 'A');

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealFirst, &mut rng)),
            vec![(0, 1, 'N')],
        );

        puzzle.mark_target_found(0);

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealFirst, &mut rng)),
            vec![(1, 0, 'D')],
        );
    }

    #[test]
    fn reveal_last() {
        let mut puzzle = make_puzzle();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealLast, &mut rng)),
            vec![(2, 0, 'G'), (2, 1, 'E'), (2, 2, 'A'), (2, 3, 'R')],
        );

        puzzle.reveal(2, 1, 'E');

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealLast, &mut rng)),
            vec![(2, 0, 'G'), (2, 2, 'A'), (2, 3, 'R')],
        );

        puzzle.mark_target_found(2);

        assert_eq!(
            positions(&select_reveals(&puzzle, HintKind::RevealLast, &mut rng)),
            vec![(1, 0, 'D'), (1, 1, 'E'), (1, 2, 'N')],
        );
    }

    #[test]
    fn reveal_each() {
        let mut puzzle = make_puzzle();
        let mut rng = StdRng::seed_from_u64(1);

        puzzle.mark_target_found(1);
        puzzle.reveal(2, 0, 'G');

        assert_eq!(
            positions(&select_reveals(
                &puzzle,
                HintKind::RevealFirstOfEach,
                &mut rng,
            )),
            vec![(0, 0, 'A'), (2, 1, 'E')],
        );
    }

    #[test]
    fn reveal_random() {
        let mut puzzle = make_puzzle();
        puzzle.mark_target_found(0);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);

            let reveals = select_reveals(
                &puzzle,
                HintKind::RevealRandom,
                &mut rng,
            );

            assert_eq!(reveals.len(), 2);
            assert_eq!(reveals[0].row, 1);
            assert_eq!(reveals[1].row, 2);

            for reveal in reveals {
                assert_eq!(
                    Some(reveal.letter),
                    puzzle.target_letter(reveal.row, reveal.col),
                );
            }
        }
    }

    #[test]
    fn not_enough_points() {
        let puzzle = make_puzzle();
        let mut rng = StdRng::seed_from_u64(1);
        let mut points = 4;

        assert_eq!(
            activate_hint(
                &puzzle,
                HintKind::RevealLast,
                &HintCosts::default(),
                &mut points,
                &mut rng,
            ),
            Err(HintError::NotEnoughPoints { cost: 5, available: 4 }),
        );
        assert_eq!(points, 4);

        let reveals = activate_hint(
            &puzzle,
            HintKind::RevealRandom,
            &HintCosts::default(),
            &mut points,
            &mut rng,
        ).unwrap();

        assert_eq!(reveals.len(), 3);
        assert_eq!(points, 1);
    }

    #[test]
    fn refused() {
        let mut puzzle = make_puzzle();
        let mut rng = StdRng::seed_from_u64(1);
        let mut points = 100;

        for (col, letter) in "and".chars().enumerate() {
            puzzle.reveal(0, col, letter);
        }
        for (col, letter) in "den".chars().enumerate() {
            puzzle.reveal(1, col, letter);
        }
        puzzle.mark_target_found(2);

        // Every unfound word is filled in but not yet marked as found
        assert_eq!(
            activate_hint(
                &puzzle,
                HintKind::RevealFirst,
                &HintCosts::default(),
                &mut points,
                &mut rng,
            ),
            Err(HintError::NothingToReveal),
        );

        puzzle.mark_target_found(0);
        puzzle.mark_target_found(1);

        assert_eq!(
            activate_hint(
                &puzzle,
                HintKind::RevealFirst,
                &HintCosts::default(),
                &mut points,
                &mut rng,
            ),
            Err(HintError::PuzzleSolved),
        );
        assert_eq!(points, 100);
    }

    #[test]
    fn names() {
        for kind in HintKind::ALL {
            assert_eq!(HintKind::from_name(kind.name()), Some(kind));
        }

        assert_eq!(HintKind::from_name("middle"), None);
    }
}
