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

/// What happened when the trace touched a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    Started,
    Added,
    /// Moving back onto the previous letter removes the last one.
    Removed,
    Ignored,
}

/// A path being dragged through the letters of the wheel.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    path: Vec<usize>,
    guess: String,
    active: bool,
}

/// A finished trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedWord {
    pub path: Vec<usize>,
    pub guess: String,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub fn begin(&mut self, position: usize, wheel: &[char]) -> TraceStep {
        let Some(&letter) = wheel.get(position)
        else {
            return TraceStep::Ignored;
        };

        self.path.clear();
        self.path.push(position);
        self.guess.clear();
        self.guess.push(letter);
        self.active = true;

        TraceStep::Started
    }

    pub fn touch(&mut self, position: usize, wheel: &[char]) -> TraceStep {
        if !self.active {
            return TraceStep::Ignored;
        }

        let Some(&letter) = wheel.get(position)
        else {
            return TraceStep::Ignored;
        };

        if !self.path.contains(&position) {
            self.path.push(position);
            self.guess.push(letter);
            TraceStep::Added
        } else if self.path.len() >= 2
            && self.path[self.path.len() - 2] == position
        {
            self.path.pop();
            self.guess.pop();
            TraceStep::Removed
        } else {
            TraceStep::Ignored
        }
    }

    /// Ends the trace and returns what was spelled, if a trace was in
    /// progress.
    pub fn finish(&mut self) -> Option<TracedWord> {
        if !self.active {
            return None;
        }

        self.active = false;

        Some(TracedWord {
            path: std::mem::take(&mut self.path),
            guess: std::mem::take(&mut self.guess),
        })
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.guess.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static WHEEL: [char; 6] = ['N', 'E', 'D', 'R', 'A', 'G'];

    #[test]
    fn trace() {
        let mut trace = Trace::new();

        assert_eq!(trace.touch(0, &WHEEL), TraceStep::Ignored);
        assert!(trace.finish().is_none());

        assert_eq!(trace.begin(2, &WHEEL), TraceStep::Started);
        assert_eq!(trace.guess(), "D");
        assert_eq!(trace.touch(1, &WHEEL), TraceStep::Added);
        assert_eq!(trace.touch(1, &WHEEL), TraceStep::Ignored);
        assert_eq!(trace.touch(0, &WHEEL), TraceStep::Added);
        assert_eq!(trace.guess(), "DEN");
        assert_eq!(trace.path(), &[2, 1, 0]);

        // Moving back to the second-to-last letter undoes the last one
        assert_eq!(trace.touch(1, &WHEEL), TraceStep::Removed);
        assert_eq!(trace.guess(), "DE");

        // Moving to an earlier letter does nothing
        assert_eq!(trace.touch(3, &WHEEL), TraceStep::Added);
        assert_eq!(trace.touch(2, &WHEEL), TraceStep::Ignored);
        assert_eq!(trace.touch(10, &WHEEL), TraceStep::Ignored);
        assert_eq!(trace.guess(), "DER");

        assert_eq!(
            trace.finish(),
            Some(TracedWord { path: vec![2, 1, 3], guess: "DER".to_string() }),
        );
        assert!(!trace.is_active());
        assert!(trace.guess().is_empty());
        assert_eq!(trace.touch(4, &WHEEL), TraceStep::Ignored);
    }

    #[test]
    fn restart() {
        let mut trace = Trace::new();

        assert_eq!(trace.begin(10, &WHEEL), TraceStep::Ignored);
        assert!(!trace.is_active());

        trace.begin(0, &WHEEL);
        trace.touch(1, &WHEEL);
        trace.begin(5, &WHEEL);

        assert_eq!(trace.path(), &[5]);
        assert_eq!(trace.guess(), "G");

        trace.clear();

        assert!(!trace.is_active());
        assert!(trace.finish().is_none());
    }
}
