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

//! Timed effects that are advanced once per frame.

use serde::Serialize;

/// A letter travelling from the wheel to a tile of the grid. The
/// tile is only filled in when the flight lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterFlight {
    pub letter: char,
    /// Wheel position the letter leaves from, or `None` to leave
    /// from the middle of the wheel.
    pub from: Option<usize>,
    pub row: usize,
    pub col: usize,
    /// Goes from 0 to 1. Negative values delay the start.
    pub progress: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Flights {
    flights: Vec<LetterFlight>,
}

impl Flights {
    pub fn new() -> Flights {
        Flights::default()
    }

    pub fn launch(&mut self, flight: LetterFlight) {
        self.flights.push(flight);
    }

    /// Moves every flight along and returns the ones that landed, in
    /// launch order.
    pub fn advance(&mut self, dt: f32, speed: f32) -> Vec<LetterFlight> {
        let mut landed = Vec::new();

        self.flights.retain_mut(|flight| {
            flight.progress += dt * speed;

            if flight.progress >= 1.0 {
                flight.progress = 1.0;
                landed.push(*flight);
                false
            } else {
                true
            }
        });

        landed
    }

    pub fn flights(&self) -> &[LetterFlight] {
        &self.flights
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn clear(&mut self) {
        self.flights.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PulseTarget {
    Row(usize),
    BonusCounter,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pulse {
    pub target: PulseTarget,
    pub remaining: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Pulses {
    pulses: Vec<Pulse>,
}

impl Pulses {
    pub fn new() -> Pulses {
        Pulses::default()
    }

    /// Starts a pulse, restarting it if the target is already
    /// pulsing.
    pub fn start(&mut self, target: PulseTarget, duration: f32) {
        self.pulses.retain(|pulse| pulse.target != target);
        self.pulses.push(Pulse { target, remaining: duration });
    }

    pub fn advance(&mut self, dt: f32) {
        self.pulses.retain_mut(|pulse| {
            pulse.remaining -= dt;
            pulse.remaining > 0.0
        });
    }

    pub fn is_pulsing(&self, target: PulseTarget) -> bool {
        self.pulses.iter().any(|pulse| pulse.target == target)
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn flight(col: usize, progress: f32) -> LetterFlight {
        LetterFlight {
            letter: 'A',
            from: Some(col),
            row: 0,
            col,
            progress,
        }
    }

    #[test]
    fn landing() {
        let mut flights = Flights::new();

        flights.launch(flight(0, 0.0));
        flights.launch(flight(1, -0.5));
        flights.launch(flight(2, -1.0));

        assert!(flights.advance(0.25, 2.0).is_empty());
        assert_eq!(flights.flights()[0].progress, 0.5);
        assert_eq!(flights.flights()[1].progress, 0.0);

        let landed = flights.advance(0.25, 2.0);
        assert_eq!(landed.len(), 1);
        assert_eq!(landed[0].col, 0);
        assert_eq!(landed[0].progress, 1.0);
        assert_eq!(flights.flights().len(), 2);

        let landed = flights.advance(10.0, 2.0);
        assert_eq!(
            landed.iter().map(|f| f.col).collect::<Vec<_>>(),
            vec![1, 2],
        );
        assert!(flights.is_empty());
    }

    #[test]
    fn pulses() {
        let mut pulses = Pulses::new();

        pulses.start(PulseTarget::Row(2), 0.5);
        pulses.start(PulseTarget::BonusCounter, 1.0);

        assert!(pulses.is_pulsing(PulseTarget::Row(2)));
        assert!(!pulses.is_pulsing(PulseTarget::Row(1)));

        pulses.advance(0.25);
        pulses.start(PulseTarget::BonusCounter, 1.0);
        pulses.advance(0.5);

        assert!(!pulses.is_pulsing(PulseTarget::Row(2)));
        assert!(pulses.is_pulsing(PulseTarget::BonusCounter));
        assert_eq!(pulses.pulses().len(), 1);

        pulses.clear();
        assert!(pulses.pulses().is_empty());
    }
}
