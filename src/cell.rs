use core::fmt::Debug;

use crate::Coord;

/// A single position on the infinite plane.
///
/// Cells are plain values: two cells are the same cell iff their coordinates are equal, which is
/// what lets the board use them directly as set keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The 8 cells of the Moore neighbourhood, starting top left and going row by row.
    ///
    /// Arithmetic wraps at the edges of `Coord`, so this never overflows.
    pub fn neighbors(&self) -> [Cell; 8] {
        let (x, y) = (self.x, self.y);
        let (l, r) = (x.wrapping_sub(1), x.wrapping_add(1));
        let (u, d) = (y.wrapping_sub(1), y.wrapping_add(1));

        [
            Cell::new(l, u),
            Cell::new(x, u),
            Cell::new(r, u),
            Cell::new(l, y),
            Cell::new(r, y),
            Cell::new(l, d),
            Cell::new(x, d),
            Cell::new(r, d),
        ]
    }
}

impl From<(Coord, Coord)> for Cell {
    fn from((x, y): (Coord, Coord)) -> Self {
        Cell::new(x, y)
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::Cell;

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let c = Cell::new(3, -7);
        let n: HashSet<Cell> = c.neighbors().into_iter().collect();

        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        assert!(
            n.iter()
                .all(|m| (m.x - c.x).abs() <= 1 && (m.y - c.y).abs() <= 1)
        );
    }

    #[test]
    fn neighbors_wrap_at_the_edge() {
        let c = Cell::new(i64::MAX, i64::MIN);
        let n = c.neighbors();

        assert!(n.contains(&Cell::new(i64::MIN, i64::MIN)));
        assert!(n.contains(&Cell::new(i64::MAX, i64::MAX)));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Cell::new(-1, 4)), "(-1, 4)");
    }
}
