use crate::Coord;
use crate::cell::Cell;

/// The pattern the binary starts from: a block, a Gosper glider gun laid out in pieces,
/// and a pulsar on the right.
#[rustfmt::skip]
pub const DEFAULT_SEED: &[(Coord, Coord)] = &[
    // block
    (1, 5), (2, 5), (1, 6), (2, 6),

    // gun, left half
    (13, 3), (14, 3), (12, 4), (16, 4), (11, 5), (17, 5), (11, 6), (15, 6), (17, 6), (18, 6),
    (11, 7), (17, 7), (12, 8), (16, 8), (13, 9), (14, 9),

    // gun, right half
    (25, 1), (23, 2), (25, 2), (21, 3), (22, 3), (21, 4), (22, 4), (21, 5), (22, 5), (23, 6),
    (25, 6), (25, 7), (35, 3), (36, 3), (35, 4), (36, 4),

    // pulsar
    (62, 6), (63, 6), (64, 6), (68, 6), (69, 6), (70, 6),
    (60, 8), (65, 8), (67, 8), (72, 8),
    (60, 9), (65, 9), (67, 9), (72, 9),
    (60, 10), (65, 10), (67, 10), (72, 10),
    (62, 11), (63, 11), (64, 11), (68, 11), (69, 11), (70, 11),
    (62, 13), (63, 13), (64, 13), (68, 13), (69, 13), (70, 13),
    (60, 14), (65, 14), (67, 14), (72, 14),
    (60, 15), (65, 15), (67, 15), (72, 15),
    (60, 16), (65, 16), (67, 16), (72, 16),
    (62, 18), (63, 18), (64, 18), (68, 18), (69, 18), (70, 18),
];

pub fn default_seed() -> impl Iterator<Item = Cell> {
    DEFAULT_SEED.iter().map(|&c| Cell::from(c))
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::cell::Cell;

    #[test]
    fn default_seed_has_no_duplicates() {
        let cells: HashSet<Cell> = super::default_seed().collect();

        assert_eq!(cells.len(), super::DEFAULT_SEED.len());
        assert_eq!(cells.len(), 84);
    }
}
