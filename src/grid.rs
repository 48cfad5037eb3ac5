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

pub const BLANK_CHARACTER: char = '_';

/// Converts a letter to the form shown on the wheel and in the
/// grid. Letters without a single-character uppercase form are left
/// alone.
pub fn upper_letter(ch: char) -> char {
    let mut upper = ch.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Revealed(char),
}

/// One row of tiles for each target word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Blank => write!(f, "{}", BLANK_CHARACTER),
            Cell::Revealed(ch) => write!(f, "{}", ch),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for cell in row.iter() {
                cell.fmt(f)?;
            }
        }

        Ok(())
    }
}

impl Grid {
    pub fn new<I>(lengths: I) -> Grid
        where I: IntoIterator<Item = usize>
    {
        Grid {
            rows: lengths.into_iter()
                .map(|length| vec![Cell::Blank; length])
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Fills in a tile. Returns false if the position is outside of
    /// the grid.
    pub fn set(&mut self, row: usize, col: usize, letter: char) -> bool {
        let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col))
        else {
            return false;
        };

        *cell = Cell::Revealed(upper_letter(letter));

        true
    }

    pub fn first_blank(&self, row: usize) -> Option<usize> {
        self.rows.get(row)?.iter().position(|&cell| cell == Cell::Blank)
    }

    pub fn blanks(&self, row: usize) -> Vec<usize> {
        let Some(row) = self.rows.get(row)
        else {
            return Vec::new();
        };

        row.iter()
            .enumerate()
            .filter_map(|(i, &cell)| (cell == Cell::Blank).then_some(i))
            .collect()
    }

    pub fn is_row_filled(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(|row| {
            row.iter().all(|&cell| cell != Cell::Blank)
        })
    }

    /// The letters of a row if every tile has been filled in.
    pub fn row_word(&self, row: usize) -> Option<String> {
        self.rows.get(row)?
            .iter()
            .map(|&cell| match cell {
                Cell::Revealed(ch) => Some(ch),
                Cell::Blank => None,
            })
            .collect()
    }

    /// The row as it would be shown, with blanks as underscores.
    pub fn row_text(&self, row: usize) -> String {
        self.rows.get(row)
            .map(|row| row.iter().map(Cell::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill() {
        let mut grid = Grid::new([3, 4]);

        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.first_blank(0), Some(0));
        assert_eq!(grid.blanks(1), vec![0, 1, 2, 3]);
        assert!(!grid.is_row_filled(0));
        assert_eq!(grid.row_word(0), None);

        assert!(grid.set(0, 0, 'd'));
        assert!(grid.set(0, 2, 'N'));
        assert_eq!(grid.cell(0, 0), Some(Cell::Revealed('D')));
        assert_eq!(grid.first_blank(0), Some(1));
        assert_eq!(grid.blanks(0), vec![1]);
        assert_eq!(grid.row_text(0), "D_N");

        assert!(grid.set(0, 1, 'e'));
        assert!(grid.is_row_filled(0));
        assert_eq!(grid.first_blank(0), None);
        assert_eq!(grid.row_word(0).as_deref(), Some("DEN"));

        assert!(!grid.set(0, 3, 'x'));
        assert!(!grid.set(2, 0, 'x'));
        assert!(!grid.is_row_filled(2));
        assert_eq!(grid.cell(5, 5), None);
        assert!(grid.blanks(7).is_empty());
    }

    #[test]
    fn display() {
        let mut grid = Grid::new([3, 5]);

        grid.set(0, 1, 'e');
        grid.set(1, 0, 'g');
        grid.set(1, 4, 'd');

        assert_eq!(grid.to_string(), "_E_\nG___D");
        assert_eq!(Grid::default().to_string(), "");
    }

    #[test]
    fn upper() {
        assert_eq!(upper_letter('a'), 'A');
        assert_eq!(upper_letter('ĉ'), 'Ĉ');
        assert_eq!(upper_letter('Q'), 'Q');
        assert_eq!(upper_letter('ß'), 'ß');
    }
}
