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
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use wordwheel::dictionary::Dictionary;
use wordwheel::difficulty::Difficulty;
use wordwheel::generate_puzzle::{classify_root, Tier};
use wordwheel::load_dictionary::load_dictionary;
use wordwheel::logger;
use wordwheel::session::UsedWords;
use wordwheel::sub_words::canonical_letters;

#[derive(Parser)]
#[command(
    name = "check-dictionary",
    about = "Checks that a dictionary has enough root words for each \
             difficulty",
)]
struct Cli {
    /// CSV file to check
    #[arg(default_value = "data/words.csv")]
    dictionary: PathBuf,

    /// Show more log messages. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

enum Problem {
    SkippedLine(usize),
    NoRoots,
    NotEnoughRoots {
        difficulty: Difficulty,
        available: usize,
        needed: usize,
    },
    NoLastPuzzleRoots(Difficulty),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::SkippedLine(line_num) => {
                write!(f, "line {}: record was skipped", line_num)
            },
            Problem::NoRoots => {
                write!(f, "there are no words that can be used as a base word")
            },
            Problem::NotEnoughRoots { difficulty, available, needed } => {
                write!(
                    f,
                    "{}: only {} root words match but a session needs {}",
                    difficulty,
                    available,
                    needed,
                )
            },
            Problem::NoLastPuzzleRoots(difficulty) => {
                write!(
                    f,
                    "{}: no root words match for the last puzzle",
                    difficulty,
                )
            },
        }
    }
}

/// Root words are counted by their letter set because a session never
/// uses two anagrams of the same word.
#[derive(Default)]
struct TierCounts {
    ideal: HashSet<String>,
    fallback: HashSet<String>,
    broad: HashSet<String>,
}

impl TierCounts {
    fn matching(&self) -> usize {
        self.ideal.union(&self.fallback).count()
    }
}

impl fmt::Display for TierCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ideal, {} fallback, {} broad",
            self.ideal.len(),
            self.fallback.len(),
            self.broad.len(),
        )
    }
}

fn count_tiers(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    is_last_puzzle: bool,
) -> TierCounts {
    let used = UsedWords::new();
    let mut counts = TierCounts::default();

    for root in dictionary.roots() {
        let set = match classify_root(root, difficulty, is_last_puzzle, &used) {
            Some(Tier::Ideal) => &mut counts.ideal,
            Some(Tier::Fallback) => &mut counts.fallback,
            Some(Tier::Broad) => &mut counts.broad,
            Some(Tier::LastResort) | None => continue,
        };

        set.insert(canonical_letters(&root.text));
    }

    counts
}

fn check_difficulty(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    problems: &mut Vec<Problem>,
) {
    let counts = count_tiers(dictionary, difficulty, false);

    println!("{}: {}", difficulty, counts);

    let Some(puzzle_count) = difficulty.puzzle_count()
    else {
        return;
    };

    // The last puzzle has its own criteria
    let needed = puzzle_count - 1;

    if counts.matching() < needed {
        problems.push(Problem::NotEnoughRoots {
            difficulty,
            available: counts.matching(),
            needed,
        });
    }

    let last_counts = count_tiers(dictionary, difficulty, true);

    println!("{} (last puzzle): {}", difficulty, last_counts);

    if last_counts.matching() == 0 {
        problems.push(Problem::NoLastPuzzleRoots(difficulty));
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("{}", e);
    }

    let report = match load_dictionary(&cli.dictionary) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}: {}", cli.dictionary.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let dictionary = report.dictionary;
    let root_count = dictionary.roots().count();

    println!("{} words, {} roots", dictionary.len(), root_count);

    let mut problems = report.skipped_lines
        .into_iter()
        .map(Problem::SkippedLine)
        .collect::<Vec<_>>();

    if root_count == 0 {
        problems.push(Problem::NoRoots);
    } else {
        for difficulty in Difficulty::ALL {
            check_difficulty(&dictionary, difficulty, &mut problems);
        }
    }

    if problems.is_empty() {
        return ExitCode::SUCCESS;
    }

    for problem in problems {
        eprintln!("{}: {}", cli.dictionary.display(), problem);
    }

    ExitCode::FAILURE
}
