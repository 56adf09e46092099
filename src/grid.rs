//! Bounds checks and neighbourhood enumeration on the square board.

use crate::common::Coord;
use crate::config::{BOARD_SIZE, DIRECTIONS_8};

/// True iff `(r, c)` lies on the board. Takes signed values so callers can
/// test offsets that step off the top or left edge.
pub fn in_bounds(r: isize, c: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&r) && (0..BOARD_SIZE as isize).contains(&c)
}

/// The up-to-8 cells at Chebyshev distance 1 from `coord` that are on the board.
pub fn neighbours8((r, c): Coord) -> Vec<Coord> {
    DIRECTIONS_8
        .iter()
        .map(|&(dr, dc)| (r as isize + dr, c as isize + dc))
        .filter(|&(nr, nc)| in_bounds(nr, nc))
        .map(|(nr, nc)| (nr as usize, nc as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_have_three_neighbours() {
        assert_eq!(neighbours8((0, 0)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbours8((9, 9)).len(), 3);
    }

    #[test]
    fn edges_and_interior() {
        assert_eq!(neighbours8((0, 5)).len(), 5);
        assert_eq!(neighbours8((4, 4)).len(), 8);
    }

    #[test]
    fn bounds() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(9, 9));
        assert!(!in_bounds(-1, 3));
        assert!(!in_bounds(3, 10));
    }
}
