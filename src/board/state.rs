use super::{Move, Piece, PieceColor, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The game board.
///
/// The 64-cell grid owns every live piece by value. Per-color rosters list
/// the squares of the live pieces of each side in placement order, and the
/// king squares are tracked separately. `Clone` produces a fully independent
/// snapshot, which is what speculative move testing relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [Option<Piece>; 64],
    pub(crate) rosters: [Vec<Position>; 2],
    pub(crate) kings: [Option<Position>; 2],
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// Standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            for color in PieceColor::BOTH {
                board.place(Piece::new(*kind, color, Position(file, color.home_rank())));
            }
        }
        for file in 0..8 {
            for color in PieceColor::BOTH {
                board.place(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Position(file, color.pawn_start_rank()),
                ));
            }
        }
        board
    }

    /// A board with no pieces at all.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [None; 64],
            rosters: [Vec::with_capacity(16), Vec::with_capacity(16)],
            kings: [None, None],
            history: Vec::new(),
        }
    }

    /// True iff both coordinates are in `[0, 8)`.
    #[inline]
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    /// The occupant of `pos`. Off-board squares are simply empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        pos.index().and_then(|idx| self.grid[idx])
    }

    /// True if `pos` is on the board and unoccupied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        pos.is_valid() && self.piece_at(pos).is_none()
    }

    /// Color of the piece on `pos`, if any.
    #[inline]
    #[must_use]
    pub fn color_at(&self, pos: Position) -> Option<PieceColor> {
        self.piece_at(pos).map(|p| p.color())
    }

    /// Live pieces of `color`, in roster order. The returned vector is a copy.
    #[must_use]
    pub fn pieces(&self, color: PieceColor) -> Vec<Piece> {
        self.rosters[color.index()]
            .iter()
            .filter_map(|&pos| self.piece_at(pos))
            .collect()
    }

    /// Number of live pieces of `color`.
    #[must_use]
    pub fn piece_count(&self, color: PieceColor) -> usize {
        self.rosters[color.index()].len()
    }

    /// Square of `color`'s king, or `None` on a board set up without one.
    #[inline]
    #[must_use]
    pub fn king_position(&self, color: PieceColor) -> Option<Position> {
        self.kings[color.index()]
    }

    /// `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king of that color. A game board always
    /// has one; only hand-built boards can lack it.
    #[must_use]
    pub fn king(&self, color: PieceColor) -> Piece {
        match self.king_position(color).and_then(|pos| self.piece_at(pos)) {
            Some(king) => king,
            None => panic!("board invariant violated: no {color} king"),
        }
    }

    /// Every move applied to this board, oldest first.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Put `piece` on its own square, replacing any occupant.
    pub(crate) fn place(&mut self, piece: Piece) {
        let pos = piece.position();
        let Some(idx) = pos.index() else {
            return;
        };
        if self.grid[idx].is_some() {
            self.take(pos);
        }
        self.grid[idx] = Some(piece);
        self.rosters[piece.color().index()].push(pos);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(pos);
        }
    }

    /// Remove and return the occupant of `pos`.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        let idx = pos.index()?;
        let piece = self.grid[idx].take()?;
        let roster = &mut self.rosters[piece.color().index()];
        if let Some(slot) = roster.iter().position(|&p| p == pos) {
            roster.remove(slot);
        }
        if piece.kind() == PieceKind::King && self.kings[piece.color().index()] == Some(pos) {
            self.kings[piece.color().index()] = None;
        }
        Some(piece)
    }

    /// Move the occupant of `from` onto the empty square `to`, marking it
    /// as moved. Roster order is preserved.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let (from_idx, to_idx) = (from.index()?, to.index()?);
        let mut piece = self.grid[from_idx].take()?;
        piece.relocate(to);
        self.grid[to_idx] = Some(piece);

        let c_idx = piece.color().index();
        if let Some(slot) = self.rosters[c_idx].iter_mut().find(|p| **p == from) {
            *slot = to;
        }
        if piece.kind() == PieceKind::King {
            self.kings[c_idx] = Some(to);
        }
        Some(piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
