//! Check, checkmate and stalemate detection.
//!
//! Everything here is derived from the board on demand. Checkmate and
//! stalemate both reduce to "is the side in check" plus "does it have any
//! legal move", because legal move generation already rejects every move
//! that leaves the mover's king attacked. Evasions, captures of the checker
//! and interpositions are therefore all covered by the same filter, however
//! many pieces give check.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, PieceColor, Position};

/// Classification of a position for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    NotInCheck,
    InCheck,
    Checkmated,
    Stalemated,
}

impl CheckStatus {
    /// Checkmate or stalemate.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, CheckStatus::Checkmated | CheckStatus::Stalemated)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CheckStatus::NotInCheck => "not in check",
            CheckStatus::InCheck => "in check",
            CheckStatus::Checkmated => "checkmated",
            CheckStatus::Stalemated => "stalemated",
        };
        f.write_str(text)
    }
}

impl Board {
    /// True if any live piece of `attacker` threatens `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Position, attacker: PieceColor) -> bool {
        self.rosters[attacker.index()]
            .iter()
            .filter_map(|&pos| self.piece_at(pos))
            .any(|piece| piece.attack_positions(self).contains(&square))
    }

    /// True iff an opposing piece attacks `color`'s king. A board without
    /// that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        match self.king_position(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: PieceColor) -> bool {
        self.status(color) == CheckStatus::Checkmated
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: PieceColor) -> bool {
        self.status(color) == CheckStatus::Stalemated
    }

    /// Classify the position for `color`.
    #[must_use]
    pub fn status(&self, color: PieceColor) -> CheckStatus {
        let in_check = self.is_in_check(color);
        let has_move = self
            .pieces(color)
            .iter()
            .any(|piece| !piece.legal_moves(self).is_empty());

        match (in_check, has_move) {
            (true, true) => CheckStatus::InCheck,
            (true, false) => CheckStatus::Checkmated,
            (false, true) => CheckStatus::NotInCheck,
            (false, false) => CheckStatus::Stalemated,
        }
    }

    /// Every square `color` may move some piece to right now, sorted and
    /// without duplicates.
    #[must_use]
    pub fn allowable_squares(&self, color: PieceColor) -> Vec<Position> {
        let mut squares: Vec<Position> = self.legal_moves(color).iter().map(|mv| mv.to()).collect();
        squares.sort_unstable();
        squares.dedup();
        squares
    }
}

/// Per-square attacker cache for both colors.
///
/// The map is a snapshot: it describes the board passed to the last
/// [`AttackMap::update`] and must be rebuilt after every move.
#[derive(Clone, Debug)]
pub struct AttackMap {
    attackers: [Vec<Vec<Position>>; 2],
}

impl AttackMap {
    /// Build the map for `board`.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        let mut map = AttackMap {
            attackers: [vec![Vec::new(); 64], vec![Vec::new(); 64]],
        };
        map.update(board);
        map
    }

    /// Recompute every attacker list from `board`.
    pub fn update(&mut self, board: &Board) {
        for color in PieceColor::BOTH {
            let table = &mut self.attackers[color.index()];
            table.iter_mut().for_each(Vec::clear);
            for piece in board.pieces(color) {
                for target in piece.attack_positions(board) {
                    if let Some(idx) = target.index() {
                        table[idx].push(piece.position());
                    }
                }
            }
        }
    }

    /// Squares of the `color` pieces attacking `square`.
    #[must_use]
    pub fn attackers(&self, square: Position, color: PieceColor) -> &[Position] {
        match square.index() {
            Some(idx) => self.attackers[color.index()][idx].as_slice(),
            None => &[],
        }
    }

    #[must_use]
    pub fn is_attacked(&self, square: Position, color: PieceColor) -> bool {
        !self.attackers(square, color).is_empty()
    }

    /// Opposing pieces currently giving check to `color`'s king on `board`.
    #[must_use]
    pub fn checkers(&self, board: &Board, color: PieceColor) -> &[Position] {
        match board.king_position(color) {
            Some(king_sq) => self.attackers(king_sq, color.opponent()),
            None => &[],
        }
    }
}
