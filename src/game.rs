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
use log::{debug, error, info};
use rand::Rng;
use serde::Serialize;
use super::config::{GameConfig, HintCosts};
use super::dictionary::{Dictionary, WordRecord};
use super::difficulty::Difficulty;
use super::effect::Effect;
use super::flight::{Flights, LetterFlight, Pulse, PulseTarget, Pulses};
use super::generate_puzzle::generate;
use super::guess::{self, GuessOutcome};
use super::hint::{self, HintKind};
use super::puzzle::{BonusGroup, Puzzle};
use super::session::{self, SessionState};
use super::trace::{Trace, TraceStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Loading,
    Error,
    MainMenu,
    Playing,
    /// The puzzle is solved and is waiting for the player to
    /// continue.
    Solved,
    SessionComplete,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Screen::Loading => "loading",
            Screen::Error => "error",
            Screen::MainMenu => "main menu",
            Screen::Playing => "playing",
            Screen::Solved => "solved",
            Screen::SessionComplete => "session complete",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    SelectDifficulty(Difficulty),
    Practice,
    Scramble,
    ReturnToMenu,
    Continue,
    Hint(HintKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseButtonError(String);

impl fmt::Display for ParseButtonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown button “{}”", self.0)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Button::SelectDifficulty(difficulty) => write!(f, "{}", difficulty),
            Button::Practice => write!(f, "practice"),
            Button::Scramble => write!(f, "scramble"),
            Button::ReturnToMenu => write!(f, "menu"),
            Button::Continue => write!(f, "continue"),
            Button::Hint(kind) => write!(f, "hint-{}", kind.name()),
        }
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Button, ParseButtonError> {
        let name = s.trim().to_lowercase();

        let button = match name.as_str() {
            "practice" => Button::Practice,
            "scramble" => Button::Scramble,
            "menu" => Button::ReturnToMenu,
            "continue" => Button::Continue,
            _ => {
                if let Some(kind) = name.strip_prefix("hint-")
                    .and_then(HintKind::from_name)
                {
                    Button::Hint(kind)
                } else if let Ok(difficulty) = name.parse::<Difficulty>() {
                    Button::SelectDifficulty(difficulty)
                } else {
                    return Err(ParseButtonError(s.to_string()));
                }
            },
        };

        Ok(button)
    }
}

/// Input from the host. Hit-testing is already done so the wheel
/// events carry the index of the letter under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    WheelPress {
        position: usize,
    },
    WheelMove {
        position: usize,
    },
    WheelRelease,
    /// Scrolls the bonus word list by a number of lines.
    Scroll {
        lines: i32,
    },
    Button(Button),
}

/// Everything the host needs to draw a frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub error: Option<String>,
    pub difficulty: Difficulty,
    pub puzzle_number: usize,
    pub puzzle_count: usize,
    pub score: u32,
    pub hint_points: u32,
    pub hint_costs: HintCosts,
    pub wheel: Vec<char>,
    pub guess: String,
    pub path: Vec<usize>,
    pub grid: Vec<String>,
    pub found_targets: Vec<String>,
    pub found_bonus_words: Vec<String>,
    pub bonus_word_total: usize,
    pub bonus_scroll: usize,
    pub flights: Vec<LetterFlight>,
    pub pulses: Vec<Pulse>,
}

pub struct Game<R: Rng> {
    config: GameConfig,
    rng: R,
    screen: Screen,
    error: Option<String>,
    dictionary: Dictionary,
    session: SessionState,
    puzzle: Puzzle,
    trace: Trace,
    flights: Flights,
    pulses: Pulses,
    bonus_scroll: usize,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Game<R> {
        let session = SessionState::with_hint_points(
            config.starting_hint_points
        );

        Game {
            config,
            rng,
            screen: Screen::Loading,
            error: None,
            dictionary: Dictionary::new(),
            session,
            puzzle: Puzzle::empty(),
            trace: Trace::new(),
            flights: Flights::new(),
            pulses: Pulses::new(),
            bonus_scroll: 0,
        }
    }

    pub fn dictionary_loaded(&mut self, dictionary: Dictionary) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.screen != Screen::Loading {
            return effects;
        }

        if dictionary.is_empty() {
            return self.dictionary_failed("the dictionary is empty");
        }

        info!("loaded {} words", dictionary.len());

        self.dictionary = dictionary;
        self.set_screen(Screen::MainMenu, &mut effects);

        effects
    }

    /// Puts the game into the error screen. There is no way out of
    /// it.
    pub fn dictionary_failed(&mut self, message: &str) -> Vec<Effect> {
        let mut effects = Vec::new();

        error!("failed to load the dictionary: {}", message);

        self.error = Some(message.to_string());
        self.set_screen(Screen::Error, &mut effects);

        effects
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Whether there are letters still flying to the grid.
    pub fn is_animating(&self) -> bool {
        !self.flights.is_empty()
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match self.screen {
            Screen::Loading | Screen::Error => (),
            Screen::MainMenu => self.handle_menu_input(event, &mut effects),
            Screen::Playing => self.handle_play_input(event, &mut effects),
            Screen::Solved => match event {
                InputEvent::Button(Button::Continue) => {
                    self.handle_continue(&mut effects);
                },
                InputEvent::Scroll { lines } => self.scroll(lines),
                _ => (),
            },
            Screen::SessionComplete => {
                if event == InputEvent::Button(Button::Continue) {
                    self.return_to_menu(&mut effects);
                }
            },
        }

        effects
    }

    /// Advances the letter flights and pulses. Letters are written
    /// into the grid as they land.
    pub fn update(&mut self, dt: f32) -> Vec<Effect> {
        let mut effects = Vec::new();

        self.pulses.advance(dt);

        for flight in self.flights.advance(dt, self.config.flight_speed) {
            if !self.puzzle.reveal(flight.row, flight.col, flight.letter) {
                continue;
            }

            effects.push(Effect::LetterLanded {
                row: flight.row,
                col: flight.col,
                letter: flight.letter,
            });

            if let Some(points) = guess::check_word_completion(
                &mut self.puzzle,
                &mut self.session,
                flight.row,
            ) {
                effects.push(Effect::WordCompleted {
                    word_index: flight.row,
                    points,
                });

                self.check_solved(&mut effects);
            }
        }

        effects
    }

    pub fn snapshot(&self) -> Snapshot {
        let grid = self.puzzle.grid();

        Snapshot {
            screen: self.screen,
            error: self.error.clone(),
            difficulty: self.session.difficulty,
            puzzle_number: self.session.current_index + 1,
            puzzle_count: self.session.puzzle_count,
            score: self.session.score,
            hint_points: self.session.hint_points,
            hint_costs: self.config.hint_costs,
            wheel: self.puzzle.wheel().to_vec(),
            guess: self.trace.guess().to_string(),
            path: self.trace.path().to_vec(),
            grid: (0..grid.rows().len()).map(|row| grid.row_text(row)).collect(),
            found_targets: self.puzzle
                .found_targets()
                .into_iter()
                .map(str::to_string)
                .collect(),
            found_bonus_words: self.puzzle
                .found_bonus_words()
                .into_iter()
                .map(str::to_string)
                .collect(),
            bonus_word_total: self.puzzle.bonus_pool().len(),
            bonus_scroll: self.bonus_scroll,
            flights: self.flights.flights().to_vec(),
            pulses: self.pulses.pulses().to_vec(),
        }
    }

    /// The bonus word list, grouped by length.
    pub fn bonus_words(&self) -> Vec<BonusGroup> {
        self.puzzle.bonus_groups()
    }

    /// Definition and example of a found target for the info popup.
    pub fn word_details(&self, word_index: usize) -> Option<&WordRecord> {
        self.puzzle.word_details(word_index)
    }

    fn set_screen(&mut self, screen: Screen, effects: &mut Vec<Effect>) {
        if self.screen == screen {
            return;
        }

        debug!("screen: {} → {}", self.screen, screen);

        if !matches!(screen, Screen::Playing | Screen::Solved) {
            self.bonus_scroll = 0;
        }

        self.screen = screen;
        effects.push(Effect::ScreenChanged { screen });
    }

    fn handle_menu_input(&mut self, event: InputEvent, effects: &mut Vec<Effect>) {
        match event {
            InputEvent::Button(Button::SelectDifficulty(difficulty)) => {
                self.start_session(difficulty, effects);
            },
            InputEvent::Button(Button::Practice) => {
                self.start_session(Difficulty::None, effects);
            },
            _ => (),
        }
    }

    fn handle_play_input(&mut self, event: InputEvent, effects: &mut Vec<Effect>) {
        match event {
            InputEvent::WheelPress { position } => {
                if self.trace.begin(position, self.puzzle.wheel())
                    == TraceStep::Started
                {
                    effects.push(Effect::LetterSelected { position });
                }
            },
            InputEvent::WheelMove { position } => {
                let last = self.trace.path().last().copied();

                match self.trace.touch(position, self.puzzle.wheel()) {
                    TraceStep::Started | TraceStep::Added => {
                        effects.push(Effect::LetterSelected { position });
                    },
                    TraceStep::Removed => {
                        if let Some(removed) = last {
                            effects.push(Effect::TraceUndone {
                                position: removed,
                            });
                        }
                    },
                    TraceStep::Ignored => (),
                }
            },
            InputEvent::WheelRelease => self.release_trace(effects),
            InputEvent::Scroll { lines } => self.scroll(lines),
            InputEvent::Button(Button::Scramble) => {
                self.puzzle.scramble(&mut self.rng);
                self.trace.clear();
                effects.push(Effect::Scrambled);
            },
            InputEvent::Button(Button::ReturnToMenu) => {
                self.return_to_menu(effects);
            },
            InputEvent::Button(Button::Hint(kind)) => {
                self.activate_hint(kind, effects);
            },
            InputEvent::Button(_) => (),
        }
    }

    fn start_session(
        &mut self,
        difficulty: Difficulty,
        effects: &mut Vec<Effect>,
    ) {
        let hint_points = self.session.hint_points;

        self.session = session::start_session(difficulty);
        self.session.hint_points = hint_points;

        self.start_puzzle(effects);
    }

    fn start_puzzle(&mut self, effects: &mut Vec<Effect>) {
        self.puzzle = generate(&self.dictionary, &mut self.session, &mut self.rng);
        self.trace.clear();
        self.flights.clear();
        self.pulses.clear();
        self.bonus_scroll = 0;

        effects.push(Effect::PuzzleStarted {
            number: self.session.current_index + 1,
            count: self.session.puzzle_count,
        });

        self.set_screen(Screen::Playing, effects);
    }

    fn return_to_menu(&mut self, effects: &mut Vec<Effect>) {
        self.session = SessionState::with_hint_points(self.session.hint_points);
        self.trace.clear();
        self.set_screen(Screen::MainMenu, effects);
    }

    fn handle_continue(&mut self, effects: &mut Vec<Effect>) {
        if self.session.is_practice() {
            self.return_to_menu(effects);
        } else if self.session.advance() {
            self.start_puzzle(effects);
        } else {
            effects.push(Effect::SessionComplete {
                score: self.session.score,
            });
            self.set_screen(Screen::SessionComplete, effects);
        }
    }

    fn check_solved(&mut self, effects: &mut Vec<Effect>) {
        if self.screen == Screen::Playing && self.puzzle.is_solved() {
            info!(
                "solved “{}” with a score of {}",
                self.puzzle.base_word(),
                self.session.score,
            );

            self.trace.clear();
            effects.push(Effect::PuzzleSolved { score: self.session.score });
            self.set_screen(Screen::Solved, effects);
        }
    }

    fn release_trace(&mut self, effects: &mut Vec<Effect>) {
        let Some(traced) = self.trace.finish()
        else {
            return;
        };

        let outcome = guess::resolve_guess(
            &mut self.puzzle,
            &mut self.session,
            &traced.guess,
            self.config.min_guess_length,
        );

        match outcome {
            GuessOutcome::TooShort => effects.push(Effect::GuessTooShort),
            GuessOutcome::NewTarget { word_index, points } => {
                for (col, (letter, &position)) in traced.guess
                    .chars()
                    .zip(traced.path.iter())
                    .enumerate()
                {
                    self.flights.launch(LetterFlight {
                        letter,
                        from: Some(position),
                        row: word_index,
                        col,
                        progress: -(col as f32) * self.config.guess_stagger,
                    });
                }

                effects.push(Effect::TargetFound { word_index, points });
                self.check_solved(effects);
            },
            GuessOutcome::RepeatTarget { word_index } => {
                self.pulses.start(
                    PulseTarget::Row(word_index),
                    self.config.pulse_duration,
                );
                effects.push(Effect::TargetRepeated { word_index });
            },
            GuessOutcome::NewBonus { word, hint_points } => {
                effects.push(Effect::BonusFound { word, hint_points });
            },
            GuessOutcome::RepeatBonus { word } => {
                self.pulses.start(
                    PulseTarget::BonusCounter,
                    self.config.pulse_duration,
                );
                effects.push(Effect::BonusRepeated { word });
            },
            GuessOutcome::Invalid => {
                effects.push(Effect::InvalidGuess { guess: traced.guess });
            },
        }
    }

    fn activate_hint(&mut self, kind: HintKind, effects: &mut Vec<Effect>) {
        let result = hint::activate_hint(
            &self.puzzle,
            kind,
            &self.config.hint_costs,
            &mut self.session.hint_points,
            &mut self.rng,
        );

        let reveals = match result {
            Ok(reveals) => reveals,
            Err(error) => {
                debug!("{} hint refused: {}", kind.name(), error);
                effects.push(Effect::HintRejected { kind, error });
                return;
            },
        };

        for (i, reveal) in reveals.iter().enumerate() {
            self.flights.launch(LetterFlight {
                letter: reveal.letter,
                from: self.puzzle.wheel_position(reveal.letter),
                row: reveal.row,
                col: reveal.col,
                progress: -(i as f32) * self.config.hint_stagger,
            });
        }

        effects.push(Effect::HintUsed {
            kind,
            cost: self.config.hint_costs.cost(kind),
            letters: reveals.len(),
        });
    }

    fn scroll(&mut self, lines: i32) {
        let groups = self.puzzle.bonus_groups();
        let line_count = groups.iter()
            .map(|group| group.words.len() + 1)
            .sum::<usize>();
        let max_scroll = line_count.saturating_sub(1) as i64;

        self.bonus_scroll =
            (self.bonus_scroll as i64 + lines as i64).clamp(0, max_scroll)
            as usize;
    }
}
