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
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordwheel::dictionary::Dictionary;
use wordwheel::difficulty::{Difficulty, MIN_DESIRED_GRID_WORDS};
use wordwheel::generate_puzzle::generate;
use wordwheel::load_dictionary::load_dictionary;
use wordwheel::logger;
use wordwheel::puzzle::{grid_order, Puzzle, ERROR_BASE_WORD};
use wordwheel::session::start_session;
use wordwheel::sub_words::{canonical_letters, is_sub_word};

#[derive(Parser)]
#[command(
    name = "generate-session",
    about = "Generates the puzzles for sessions of a difficulty and checks \
             them",
)]
struct Cli {
    /// easy, medium, hard or practice
    difficulty: Difficulty,

    /// CSV file to load the words from
    #[arg(short, long, default_value = "data/words.csv")]
    dictionary: PathBuf,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of sessions to generate
    #[arg(short = 'n', long, default_value = "1")]
    sessions: usize,

    /// Show more log messages. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

enum ProblemKind {
    NoBaseWord,
    RepeatedLetters(String),
    FewTargets(usize),
    DuplicateTarget(String),
    ShortTarget(String),
    NotASubWord(String),
    GridOrder,
}

struct Problem {
    session_num: usize,
    puzzle_num: usize,
    kind: ProblemKind,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemKind::NoBaseWord => {
                write!(f, "no base word could be chosen")
            },
            ProblemKind::RepeatedLetters(word) => {
                write!(
                    f,
                    "the letters of “{}” were already used in the session",
                    word.to_uppercase(),
                )
            },
            ProblemKind::FewTargets(count) => {
                write!(f, "only {} target words", count)
            },
            ProblemKind::DuplicateTarget(word) => {
                write!(f, "“{}” is a target twice", word.to_uppercase())
            },
            ProblemKind::ShortTarget(word) => {
                write!(f, "“{}” is too short", word.to_uppercase())
            },
            ProblemKind::NotASubWord(word) => {
                write!(
                    f,
                    "“{}” can’t be made from the base word",
                    word.to_uppercase(),
                )
            },
            ProblemKind::GridOrder => {
                write!(f, "the targets aren’t in grid order")
            },
        }
    }
}

fn check_puzzle(
    puzzle: &Puzzle,
    difficulty: Difficulty,
    used_letters: &mut HashSet<String>,
) -> Vec<ProblemKind> {
    if puzzle.base_word() == ERROR_BASE_WORD {
        return vec![ProblemKind::NoBaseWord];
    }

    let mut problems = Vec::new();
    let base = puzzle.base_word();

    if !used_letters.insert(canonical_letters(base)) {
        problems.push(ProblemKind::RepeatedLetters(base.to_string()));
    }

    let targets = puzzle.targets();

    if targets.len() < MIN_DESIRED_GRID_WORDS.min(difficulty.max_solutions()) {
        problems.push(ProblemKind::FewTargets(targets.len()));
    }

    let mut seen = HashSet::new();

    for target in targets {
        if !seen.insert(target.text.as_str()) {
            problems.push(ProblemKind::DuplicateTarget(target.text.clone()));
        }

        if target.length() < difficulty.min_sub_length() {
            problems.push(ProblemKind::ShortTarget(target.text.clone()));
        }

        if target.text != base && !is_sub_word(&target.text, base) {
            problems.push(ProblemKind::NotASubWord(target.text.clone()));
        }
    }

    if !targets.windows(2).all(|pair| grid_order(&pair[0], &pair[1]).is_le()) {
        problems.push(ProblemKind::GridOrder);
    }

    problems
}

fn print_puzzle(puzzle: &Puzzle, number: usize, count: usize) {
    let targets = puzzle.targets()
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{}/{}: {} ({} targets, {} bonus words) {}",
        number,
        count,
        puzzle.base_word().to_uppercase(),
        puzzle.targets().len(),
        puzzle.bonus_pool().len(),
        targets,
    );
}

fn generate_session(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    session_num: usize,
    rng: &mut StdRng,
    problems: &mut Vec<Problem>,
) {
    let mut session = start_session(difficulty);
    let mut used_letters = HashSet::new();

    loop {
        let puzzle = generate(dictionary, &mut session, rng);
        let puzzle_num = session.current_index;

        print_puzzle(&puzzle, puzzle_num + 1, session.puzzle_count);

        problems.extend(
            check_puzzle(&puzzle, difficulty, &mut used_letters)
                .into_iter()
                .map(|kind| Problem { session_num, puzzle_num, kind })
        );

        if !session.advance() {
            break;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("{}", e);
    }

    let dictionary = match load_dictionary(&cli.dictionary) {
        Ok(report) => report.dictionary,
        Err(e) => {
            eprintln!("{}: {}", cli.dictionary.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut problems = Vec::new();

    for session_num in 0..cli.sessions {
        if session_num > 0 {
            println!();
        }

        generate_session(
            &dictionary,
            cli.difficulty,
            session_num,
            &mut rng,
            &mut problems,
        );
    }

    let mut result = ExitCode::SUCCESS;

    for problem in problems {
        result = ExitCode::FAILURE;

        eprintln!(
            "session {}, puzzle {}: {}",
            problem.session_num + 1,
            problem.puzzle_num + 1,
            problem.kind,
        );
    }

    result
}
