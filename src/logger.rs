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

//! Sends log messages to stderr for the command-line tools.

use log::{Level, Log, Metadata, Record, SetLoggerError};

struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: {}",
                record.level().as_str().to_lowercase(),
                record.args(),
            );
        }
    }

    fn flush(&self) {
    }
}

/// Warnings are always shown. Each `--verbose` flag shows one more
/// level of detail.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbose);

    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}
