use std::collections::HashSet;

use tracing::trace;

use crate::cell::Cell;

/// Decide whether a cell is alive in the next generation.
///
/// Birth and survival both happen at exactly 3 neighbors, so the grouping here is Conway's B3/S23.
#[inline]
fn lives(alive: bool, num_alive: u8) -> bool {
    (alive && num_alive == 2) || num_alive == 3
}

/// A sparse Life universe.
///
/// Only alive cells are stored. A cell missing from the set is dead, so memory grows with the
/// population rather than with the area the pattern spans.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board {
    alive: HashSet<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    /// Mark `cell` as alive. Doing this twice is the same as doing it once.
    pub fn become_alive(&mut self, cell: Cell) {
        self.alive.insert(cell);
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Alive cells, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    /// Replace the board with its next generation.
    ///
    /// The new generation is built in a separate set from a snapshot of the current one and
    /// swapped in at the end, so every neighbor count within a tick sees the same generation.
    pub fn advance(&mut self) {
        let candidates = self.candidate_cells();
        let mut next = HashSet::with_capacity(self.alive.len());

        for &cell in &candidates {
            let num_alive = self.alive_neighbors(cell);

            if lives(self.is_alive(cell), num_alive) {
                next.insert(cell);
            }
        }

        trace!(
            candidates = candidates.len(),
            before = self.alive.len(),
            after = next.len(),
            "advanced board"
        );

        self.alive = next;
    }

    /// Every cell that could be alive next generation: the alive cells and all of their
    /// neighbors. Dead cells with no alive neighbor can't be born, so they are never looked at.
    fn candidate_cells(&self) -> HashSet<Cell> {
        let mut cells = HashSet::with_capacity(9 * self.alive.len());

        for &cell in &self.alive {
            cells.insert(cell);
            cells.extend(cell.neighbors());
        }

        cells
    }

    /// Count the alive cells among the 8 neighbors of `cell`
    fn alive_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors()
            .into_iter()
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut board = Board::new();
        board.extend(iter);
        board
    }
}

impl Extend<Cell> for Board {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.become_alive(cell);
        }
    }
}
