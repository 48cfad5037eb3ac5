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
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordwheel::config::{self, GameConfig};
use wordwheel::effect::Effect;
use wordwheel::game::{Button, Game, InputEvent, Screen};
use wordwheel::grid::upper_letter;
use wordwheel::hint::HintKind;
use wordwheel::load_dictionary::load_dictionary;
use wordwheel::logger;

// Letters fly to the grid in steps of this many seconds
const FRAME_TIME: f32 = 1.0 / 30.0;

#[derive(Parser)]
#[command(
    name = "wordwheel",
    about = "Play the letter wheel word game in the terminal",
    version,
)]
struct Cli {
    /// CSV file to load the words from
    #[arg(short, long, default_value = "data/words.csv")]
    dictionary: PathBuf,

    /// JSON file with settings to override
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show more log messages. Can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the game state as JSON after each command
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Button(Button),
    Trace(Vec<usize>),
    Guess(String),
    Bonus,
    Info(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandError {
    Unknown(String),
    BadPosition(String),
    MissingArgument(&'static str),
    LetterNotOnWheel(char),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::Unknown(command) => {
                write!(f, "unknown command “{}”, try “help”", command)
            },
            CommandError::BadPosition(position) => {
                write!(f, "“{}” isn’t a position on the wheel", position)
            },
            CommandError::MissingArgument(command) => {
                write!(f, "“{}” needs an argument", command)
            },
            CommandError::LetterNotOnWheel(letter) => {
                write!(f, "there’s no {} left on the wheel", letter)
            },
        }
    }
}

const HELP: &str = "\
easy, medium, hard   start a session
practice             play a single puzzle
trace 0 3 2          trace the letters at these wheel positions
guess den            trace a word by its letters
hint first           reveal letters (first, random, last or each)
scramble             shuffle the wheel
bonus                show the bonus word list
info 2               show the definition of a found word
continue             go on after solving a puzzle
menu                 return to the main menu
quit                 stop playing";

fn parse_positions<'a, I>(args: I) -> Result<Vec<usize>, CommandError>
    where I: IntoIterator<Item = &'a str>
{
    args.into_iter()
        .map(|arg| {
            arg.parse::<usize>()
                .map_err(|_| CommandError::BadPosition(arg.to_string()))
        })
        .collect()
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();

    let Some(name) = parts.next()
    else {
        return Err(CommandError::Unknown(String::new()));
    };

    let name = name.to_lowercase();

    match name.as_str() {
        "trace" => {
            let positions = parse_positions(parts)?;

            if positions.is_empty() {
                Err(CommandError::MissingArgument("trace"))
            } else {
                Ok(Command::Trace(positions))
            }
        },
        "guess" => match parts.next() {
            Some(word) => Ok(Command::Guess(word.to_string())),
            None => Err(CommandError::MissingArgument("guess")),
        },
        "hint" => {
            let Some(kind) = parts.next()
            else {
                return Err(CommandError::MissingArgument("hint"));
            };

            match HintKind::from_name(&kind.to_lowercase()) {
                Some(kind) => Ok(Command::Button(Button::Hint(kind))),
                None => Err(CommandError::Unknown(line.trim().to_string())),
            }
        },
        "info" => match parts.next() {
            Some(index) => index.parse::<usize>()
                .map(Command::Info)
                .map_err(|_| CommandError::Unknown(line.trim().to_string())),
            None => Err(CommandError::MissingArgument("info")),
        },
        "bonus" => Ok(Command::Bonus),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => name.parse::<Button>()
            .map(Command::Button)
            .map_err(|_| CommandError::Unknown(line.trim().to_string())),
    }
}

/// Works out which wheel positions spell the word, using each
/// position only once.
fn word_positions(
    wheel: &[char],
    word: &str,
) -> Result<Vec<usize>, CommandError> {
    let mut positions = Vec::<usize>::new();

    for letter in word.chars().map(upper_letter) {
        let Some(position) = (0..wheel.len())
            .find(|p| wheel[*p] == letter && !positions.contains(p))
        else {
            return Err(CommandError::LetterNotOnWheel(letter));
        };

        positions.push(position);
    }

    Ok(positions)
}

fn trace_positions(game: &mut Game<StdRng>, positions: &[usize]) -> Vec<Effect> {
    let mut effects = Vec::new();

    for (i, &position) in positions.iter().enumerate() {
        let event = if i == 0 {
            InputEvent::WheelPress { position }
        } else {
            InputEvent::WheelMove { position }
        };

        effects.extend(game.handle_input(event));
    }

    effects.extend(game.handle_input(InputEvent::WheelRelease));

    effects
}

fn settle(game: &mut Game<StdRng>, effects: &mut Vec<Effect>) {
    while game.is_animating() {
        effects.extend(game.update(FRAME_TIME));
    }
}

fn print_effects(effects: &[Effect]) {
    for effect in effects {
        // Screen changes are shown by printing the new state
        if matches!(effect, Effect::ScreenChanged { .. }) {
            continue;
        }

        let message = effect.to_string();

        if !message.is_empty() {
            println!("{}", message);
        }
    }
}

fn print_bonus_words(game: &Game<StdRng>) {
    for group in game.bonus_words() {
        println!("{} letters:", group.length);

        for entry in group.words {
            println!("  {}", entry.text);
        }
    }
}

fn print_word_details(game: &Game<StdRng>, word_index: usize) {
    let Some(word) = game.word_details(word_index)
    else {
        println!("word {} hasn’t been found", word_index);
        return;
    };

    println!("{} ({})", word.text.to_uppercase(), word.part_of_speech);

    if !word.definition.is_empty() {
        println!("{}", word.definition);
    }

    if !word.example_sentence.is_empty() {
        println!("“{}”", word.example_sentence);
    }
}

fn print_state(game: &Game<StdRng>) {
    let snapshot = game.snapshot();

    match snapshot.screen {
        Screen::Loading => (),
        Screen::Error => {
            println!(
                "error: {}",
                snapshot.error.as_deref().unwrap_or("unknown"),
            );
        },
        Screen::MainMenu => {
            println!("choose easy, medium, hard or practice");
        },
        Screen::Playing | Screen::Solved => {
            println!(
                "{} puzzle {} of {}, score {}, hint points {}",
                snapshot.difficulty,
                snapshot.puzzle_number,
                snapshot.puzzle_count,
                snapshot.score,
                snapshot.hint_points,
            );
            println!();
            println!("{}", game.puzzle().grid());
            println!();

            let wheel = snapshot.wheel
                .iter()
                .enumerate()
                .map(|(position, letter)| format!("{}:{}", position, letter))
                .collect::<Vec<_>>()
                .join(" ");

            println!("wheel: {}", wheel);
            println!(
                "bonus words: {}/{}",
                snapshot.found_bonus_words.len(),
                snapshot.bonus_word_total,
            );

            if snapshot.screen == Screen::Solved {
                println!("solved! type “continue”");
            }
        },
        Screen::SessionComplete => {
            println!(
                "session complete with a score of {}, type “continue”",
                snapshot.score,
            );
        },
    }
}

fn print_json(game: &Game<StdRng>) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(&game.snapshot())?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, ()> {
    match cli.config {
        Some(ref filename) => config::load_config(filename).map_err(|e| {
            eprintln!("{}: {}", filename.display(), e);
        }),
        None => Ok(GameConfig::default()),
    }
}

fn make_game(cli: &Cli) -> Result<Game<StdRng>, ()> {
    let config = load_config(cli)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new(config, rng);

    if load_words(&mut game, &cli.dictionary) {
        Ok(game)
    } else {
        eprintln!(
            "{}",
            game.snapshot().error.as_deref().unwrap_or("unknown error"),
        );
        Err(())
    }
}

/// Loads the dictionary into the game. A file that can’t be read or
/// has no words puts the game into the error screen and returns
/// false.
fn load_words(game: &mut Game<StdRng>, filename: &Path) -> bool {
    let report = match load_dictionary(filename) {
        Ok(report) => report,
        Err(e) => {
            game.dictionary_failed(&format!("{}: {}", filename.display(), e));
            return false;
        },
    };

    if !report.skipped_lines.is_empty() {
        warn!(
            "{}: skipped {} lines",
            filename.display(),
            report.skipped_lines.len(),
        );
    }

    game.dictionary_loaded(report.dictionary);

    game.screen() != Screen::Error
}

fn run_command(game: &mut Game<StdRng>, command: Command) -> Vec<Effect> {
    match command {
        Command::Button(button) => {
            game.handle_input(InputEvent::Button(button))
        },
        Command::Trace(positions) => trace_positions(game, &positions),
        Command::Guess(word) => {
            match word_positions(game.puzzle().wheel(), &word) {
                Ok(positions) => trace_positions(game, &positions),
                Err(e) => {
                    println!("{}", e);
                    Vec::new()
                },
            }
        },
        Command::Bonus => {
            print_bonus_words(game);
            Vec::new()
        },
        Command::Info(word_index) => {
            print_word_details(game, word_index);
            Vec::new()
        },
        Command::Help => {
            println!("{}", HELP);
            Vec::new()
        },
        Command::Quit => Vec::new(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("{}", e);
    }

    let Ok(mut game) = make_game(&cli)
    else {
        return ExitCode::FAILURE;
    };

    print_state(&game);

    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            },
        };

        if command == Command::Quit {
            break;
        }

        let mut effects = run_command(&mut game, command);
        settle(&mut game, &mut effects);

        if cli.json {
            if let Err(e) = print_json(&game) {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        } else {
            print_effects(&effects);
            print_state(&game);
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn commands() {
        assert_eq!(
            parse_command("trace 0 3 2"),
            Ok(Command::Trace(vec![0, 3, 2])),
        );
        assert_eq!(
            parse_command("trace 0 x"),
            Err(CommandError::BadPosition("x".to_string())),
        );
        assert_eq!(
            parse_command("trace"),
            Err(CommandError::MissingArgument("trace")),
        );
        assert_eq!(
            parse_command("  guess den "),
            Ok(Command::Guess("den".to_string())),
        );
        assert_eq!(
            parse_command("hint LAST"),
            Ok(Command::Button(Button::Hint(HintKind::RevealLast))),
        );
        assert_eq!(
            parse_command("Easy"),
            Ok(Command::Button(Button::SelectDifficulty(
                wordwheel::difficulty::Difficulty::Easy
            ))),
        );
        assert_eq!(parse_command("info 2"), Ok(Command::Info(2)));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert!(matches!(
            parse_command("dance"),
            Err(CommandError::Unknown(_)),
        ));
    }

    #[test]
    fn loading_words() {
        let mut game = Game::new(
            GameConfig::default(),
            StdRng::seed_from_u64(1),
        );

        assert!(!load_words(
            &mut game,
            Path::new("/this/file/does/not/exist.csv"),
        ));
        assert_eq!(game.screen(), Screen::Error);

        let filename = std::env::temp_dir().join(format!(
            "wordwheel-header-only-{}.csv",
            std::process::id(),
        ));
        std::fs::write(&filename, "text,rarity\n").unwrap();

        let mut game = Game::new(
            GameConfig::default(),
            StdRng::seed_from_u64(1),
        );
        let loaded = load_words(&mut game, &filename);

        std::fs::remove_file(&filename).unwrap();

        assert!(!loaded);
        assert_eq!(game.screen(), Screen::Error);
        assert_eq!(
            game.snapshot().error.as_deref(),
            Some("the dictionary is empty"),
        );
    }

    #[test]
    fn positions() {
        let wheel = ['G', 'A', 'R', 'D', 'E', 'N', 'A'];

        assert_eq!(word_positions(&wheel, "dean"), Ok(vec![3, 4, 1, 5]));
        assert_eq!(word_positions(&wheel, "Anna").unwrap_err(),
                   CommandError::LetterNotOnWheel('N'));
        assert_eq!(word_positions(&wheel, "naga"), Ok(vec![5, 1, 0, 6]));
    }
}
