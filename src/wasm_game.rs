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

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use super::config::GameConfig;
use super::effect::Effect;
use super::game::{Button, Game, InputEvent};
use super::load_dictionary::parse_dictionary;

const DICTIONARY_FILENAME: &str = "data/words.csv";

type PromiseClosure = Closure::<dyn FnMut(JsValue)>;

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            error!("{}", e);
            "null".to_string()
        },
    }
}

// The closures are owned here until the page goes away
struct LoadClosures {
    _response: PromiseClosure,
    content: PromiseClosure,
    error: PromiseClosure,
}

struct Inner {
    game: Game<StdRng>,
    /// Effects that happened outside of a call from the page, such as
    /// the dictionary finishing loading. They are returned with the
    /// next update.
    pending: Vec<Effect>,
    load_closures: Option<LoadClosures>,
}

impl Inner {
    fn load_failed(&mut self, message: &str) {
        let effects = self.game.dictionary_failed(message);
        self.pending.extend(effects);
    }

    fn dictionary_text_loaded(&mut self, text: &str) {
        let report = parse_dictionary(text);

        if !report.skipped_lines.is_empty() {
            info!(
                "{}: skipped {} lines",
                DICTIONARY_FILENAME,
                report.skipped_lines.len(),
            );
        }

        let effects = self.game.dictionary_loaded(report.dictionary);
        self.pending.extend(effects);
    }
}

fn with_inner<F>(inner: &Weak<RefCell<Inner>>, func: F)
    where F: FnOnce(&mut Inner)
{
    if let Some(inner) = inner.upgrade() {
        func(&mut inner.borrow_mut());
    }
}

fn queue_dictionary_load(inner: &Rc<RefCell<Inner>>) -> Result<(), String> {
    let Some(window) = web_sys::window()
    else {
        return Err("failed to get window".to_string());
    };

    let weak = Rc::downgrade(inner);

    let response = PromiseClosure::new({
        let weak = weak.clone();

        move |v: JsValue| {
            let Some(inner) = weak.upgrade()
            else {
                return;
            };

            let mut inner = inner.borrow_mut();

            let response = match v.dyn_into::<web_sys::Response>() {
                Ok(response) => response,
                Err(_) => {
                    inner.load_failed("fetch didn’t return a response");
                    return;
                },
            };

            if !response.ok() {
                inner.load_failed(&format!(
                    "{}: HTTP status {}",
                    DICTIONARY_FILENAME,
                    response.status(),
                ));
                return;
            }

            let promise = match response.text() {
                Ok(promise) => promise,
                Err(_) => {
                    inner.load_failed("error reading the dictionary data");
                    return;
                },
            };

            if let Some(closures) = inner.load_closures.as_ref() {
                let _ = promise.then2(&closures.content, &closures.error);
            }
        }
    });

    let content = PromiseClosure::new({
        let weak = weak.clone();

        move |v: JsValue| {
            with_inner(&weak, |inner| match v.as_string() {
                Some(text) => inner.dictionary_text_loaded(&text),
                None => inner.load_failed("the dictionary isn’t text"),
            });
        }
    });

    let error = PromiseClosure::new(move |_| {
        with_inner(&weak, |inner| {
            inner.load_failed(&format!(
                "error loading {}",
                DICTIONARY_FILENAME,
            ));
        });
    });

    let promise = window.fetch_with_str(DICTIONARY_FILENAME);

    let _ = promise.then2(&response, &error);

    inner.borrow_mut().load_closures = Some(LoadClosures {
        _response: response,
        content,
        error,
    });

    Ok(())
}

/// The game as seen from the page. Each input method returns the
/// list of effects it caused as JSON.
#[wasm_bindgen]
pub struct WordWheel {
    inner: Rc<RefCell<Inner>>,
}

impl WordWheel {
    fn handle_input(&self, event: InputEvent) -> String {
        let effects = self.inner.borrow_mut().game.handle_input(event);
        to_json(&effects)
    }
}

#[wasm_bindgen]
impl WordWheel {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WordWheel, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => GameConfig::default(),
        };

        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;

        let inner = Rc::new(RefCell::new(Inner {
            game: Game::new(config, StdRng::seed_from_u64(seed)),
            pending: Vec::new(),
            load_closures: None,
        }));

        if let Err(e) = queue_dictionary_load(&inner) {
            inner.borrow_mut().load_failed(&e);
        }

        Ok(WordWheel { inner })
    }

    pub fn wheel_press(&self, position: usize) -> String {
        self.handle_input(InputEvent::WheelPress { position })
    }

    pub fn wheel_move(&self, position: usize) -> String {
        self.handle_input(InputEvent::WheelMove { position })
    }

    pub fn wheel_release(&self) -> String {
        self.handle_input(InputEvent::WheelRelease)
    }

    pub fn scroll(&self, lines: i32) -> String {
        self.handle_input(InputEvent::Scroll { lines })
    }

    pub fn press_button(&self, name: &str) -> Result<String, JsValue> {
        let button = name.parse::<Button>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(self.handle_input(InputEvent::Button(button)))
    }

    /// Advances the animations by `dt` seconds.
    pub fn update(&self, dt: f32) -> String {
        let mut inner = self.inner.borrow_mut();

        let mut effects = std::mem::take(&mut inner.pending);
        effects.extend(inner.game.update(dt));

        to_json(&effects)
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.inner.borrow().game.snapshot())
    }

    pub fn bonus_words(&self) -> String {
        to_json(&self.inner.borrow().game.bonus_words())
    }

    pub fn word_details(&self, word_index: usize) -> String {
        to_json(&self.inner.borrow().game.word_details(word_index))
    }
}

#[wasm_bindgen]
pub fn init_wordwheel() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    info!("word wheel initialized");
}
