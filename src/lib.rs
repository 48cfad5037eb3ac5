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

pub mod dictionary;
pub mod load_dictionary;
pub mod sub_words;
pub mod difficulty;
pub mod grid;
pub mod puzzle;
pub mod session;
pub mod generate_puzzle;
pub mod trace;
pub mod config;
pub mod hint;
pub mod flight;
pub mod guess;
pub mod effect;
pub mod game;

#[cfg(not(target_arch = "wasm32"))]
pub mod logger;

#[cfg(target_arch = "wasm32")]
mod wasm_game;
