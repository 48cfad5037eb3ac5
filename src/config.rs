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
use std::io;
use std::path::Path;
use serde::{Deserialize, Serialize};
use super::hint::HintKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HintCosts {
    pub reveal_first: u32,
    pub reveal_random: u32,
    pub reveal_last: u32,
    pub reveal_first_of_each: u32,
}

impl Default for HintCosts {
    fn default() -> HintCosts {
        HintCosts {
            reveal_first: 2,
            reveal_random: 3,
            reveal_last: 5,
            reveal_first_of_each: 7,
        }
    }
}

impl HintCosts {
    pub fn cost(&self, kind: HintKind) -> u32 {
        match kind {
            HintKind::RevealFirst => self.reveal_first,
            HintKind::RevealRandom => self.reveal_random,
            HintKind::RevealLast => self.reveal_last,
            HintKind::RevealFirstOfEach => self.reveal_first_of_each,
        }
    }
}

/// Tunable values of the game. Any missing fields in the JSON take
/// their default value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub hint_costs: HintCosts,
    pub starting_hint_points: u32,
    /// Shorter traces are thrown away without any feedback.
    pub min_guess_length: usize,
    /// Flight progress per second. A flight lasts `1 / flight_speed`
    /// seconds.
    pub flight_speed: f32,
    /// Delay between the letters of a guessed word leaving the wheel.
    pub guess_stagger: f32,
    /// Delay between the letters revealed by a hint.
    pub hint_stagger: f32,
    /// Seconds that a row or the bonus counter pulses when a word is
    /// guessed again.
    pub pulse_duration: f32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            hint_costs: HintCosts::default(),
            starting_hint_points: 0,
            min_guess_length: 3,
            flight_speed: 3.0,
            guess_stagger: 0.03,
            hint_stagger: 0.03,
            pulse_duration: 0.6,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// The flight speed must be a positive number or letters would
    /// never land.
    BadFlightSpeed(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::BadFlightSpeed(speed) => {
                write!(f, "invalid flight speed {}", speed)
            },
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> ConfigError {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> ConfigError {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        let config = serde_json::from_str::<GameConfig>(json)?;

        if !(config.flight_speed > 0.0 && config.flight_speed.is_finite()) {
            return Err(ConfigError::BadFlightSpeed(config.flight_speed));
        }

        Ok(config)
    }
}

pub fn load_config<P: AsRef<Path>>(
    filename: P,
) -> Result<GameConfig, ConfigError> {
    let json = std::fs::read_to_string(filename)?;

    GameConfig::from_json(&json)
}
