//! Display model: a grid of cell symbols projected from a [`Battlefield`].
//!
//! Nothing here feeds back into the game rules.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::game::Battlefield;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'M',
        }
    }
}

/// Rendered state of one side's waters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardView {
    /// Project `field` into symbols; intact ship cells show as water unless
    /// `reveal_ships` is set.
    pub fn project(field: &Battlefield, reveal_ships: bool) -> Self {
        let ships = field.fleet().occupied();
        let shots = field.shots();
        let border = field.border();
        let mut cells = [[Cell::Water; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let coord = (r, c);
                *cell = match (shots.contains(coord), ships.contains(coord)) {
                    (true, true) => Cell::Hit,
                    (true, false) => Cell::Miss,
                    (false, true) if reveal_ships => Cell::Ship,
                    _ if border.contains(coord) => Cell::Miss,
                    _ => Cell::Water,
                };
            }
        }
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All symbols in row-major order, as stored in the round log.
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(Cell::symbol))
            .collect()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
