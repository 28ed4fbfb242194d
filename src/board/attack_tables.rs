use once_cell::sync::Lazy;

use super::Position;

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(i8, i8)]) -> Vec<Vec<Position>> {
    Position::all()
        .map(|from| {
            deltas
                .iter()
                .map(|&(df, dr)| from.offset(df, dr))
                .filter(|to| to.is_valid())
                .collect()
        })
        .collect()
}

/// On-board knight targets per square index.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| leaper_table(&KNIGHT_JUMPS));

/// On-board king neighbours per square index.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| leaper_table(&KING_STEPS));

/// Knight targets from `from`; empty for off-board squares.
#[inline]
pub(crate) fn knight_targets(from: Position) -> &'static [Position] {
    match from.index() {
        Some(idx) => KNIGHT_TARGETS[idx].as_slice(),
        None => &[],
    }
}

/// King neighbours of `from`; empty for off-board squares.
#[inline]
pub(crate) fn king_targets(from: Position) -> &'static [Position] {
    match from.index() {
        Some(idx) => KING_TARGETS[idx].as_slice(),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_table_corner_and_center() {
        let corner = knight_targets(Position(0, 0));
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&Position(1, 2)));
        assert!(corner.contains(&Position(2, 1)));
        assert_eq!(knight_targets(Position(3, 3)).len(), 8);
    }

    #[test]
    fn test_king_table() {
        assert_eq!(king_targets(Position(0, 0)).len(), 3);
        assert_eq!(king_targets(Position(4, 0)).len(), 5);
        assert_eq!(king_targets(Position(3, 3)).len(), 8);
        assert!(king_targets(Position(9, 9)).is_empty());
    }
}
