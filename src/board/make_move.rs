//! Move application and board invariant checks.

use super::error::BoardError;
use super::movegen::{CastleSide, KING_HOME_FILE};
use super::{Board, Move, PieceColor, PieceKind, Position};

impl Board {
    /// Apply `mv` to the board.
    ///
    /// The move is expected to come from this board's own move generation;
    /// legality (check, turn order) is not re-examined here. What is checked
    /// is that the move still fits the board, so a stale or hand-built move
    /// is rejected before anything changes:
    /// - the origin holds the recorded piece,
    /// - the destination is on the board and holds exactly the recorded
    ///   captured piece (or nothing),
    /// - a castling move starts from the unmoved king's home square, lands two
///   files toward the rook, and finds that rook unmoved in its corner.
    ///
    /// Promotion and en passant moves are refused with
    /// [`BoardError::Unsupported`].
    pub fn make_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.apply(mv)?;
        #[cfg(feature = "logging")]
        log::debug!(
            "{} {} {}{}",
            mv.piece().color(),
            mv.piece().kind(),
            mv,
            if mv.is_castling() { " (castling)" } else { "" }
        );
        Ok(())
    }

    /// `make_move` without logging, used for sandbox copies as well.
    pub(crate) fn apply(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.check_applicable(mv)?;

        let (from, to) = (mv.from(), mv.to());
        if mv.is_capture() {
            self.take(to);
        }
        self.relocate(from, to);
        if mv.is_castling() {
            let (rook_from, rook_to) = CastleSide::of(from, to).rook_squares(from.rank());
            self.relocate(rook_from, rook_to);
        }
        self.history.push(*mv);
        Ok(())
    }

    fn check_applicable(&self, mv: &Move) -> Result<(), BoardError> {
        if mv.is_promotion() {
            return Err(BoardError::Unsupported {
                feature: "Pawn promotion",
            });
        }
        if mv.is_en_passant() {
            return Err(BoardError::Unsupported {
                feature: "En passant",
            });
        }

        let (from, to) = (mv.from(), mv.to());
        if !to.is_valid() || to == from {
            return Err(BoardError::InvalidDestination { to });
        }

        let mover = self
            .piece_at(from)
            .ok_or(BoardError::EmptyOrigin { from })?;
        if !mover.same_identity(&mv.piece()) {
            return Err(BoardError::StalePiece { from });
        }

        match (self.piece_at(to), mv.captured()) {
            (None, None) => {}
            (Some(_), None) => return Err(BoardError::DestinationOccupied { to }),
            (Some(occupant), Some(captured))
                if occupant.same_identity(&captured) && occupant.color() != mover.color() => {}
            (_, Some(_)) => return Err(BoardError::CaptureMismatch { to }),
        }

        if mv.is_castling() {
            if mover.kind() != PieceKind::King {
                return Err(BoardError::Unsupported {
                    feature: "Castling without a king",
                });
            }
            let side = CastleSide::of(from, to);
            let home = Position(KING_HOME_FILE, mover.color().home_rank());
            if from != home || to != side.king_target(from) {
                return Err(BoardError::InvalidDestination { to });
            }
            if mover.has_moved() {
                return Err(BoardError::KingAlreadyMoved { from });
            }
            let (rook_from, _) = side.rook_squares(from.rank());
            let rook_ready = self.piece_at(rook_from).is_some_and(|rook| {
                rook.kind() == PieceKind::Rook && rook.color() == mover.color() && !rook.has_moved()
            });
            if !rook_ready {
                return Err(BoardError::MissingCastlingRook { rook_from });
            }
            let (lo, hi) = (from.file().min(rook_from.file()), from.file().max(rook_from.file()));
            if let Some(blocked) = (lo + 1..hi)
                .map(|file| Position(file, from.rank()))
                .find(|&sq| !self.is_empty(sq))
            {
                return Err(BoardError::DestinationOccupied { to: blocked });
            }
        }

        Ok(())
    }

    /// Verify the grid, the per-color piece lists and the king references
    /// agree, and that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut listed = [false; 64];
        for color in PieceColor::BOTH {
            for &pos in &self.rosters[color.index()] {
                let idx = pos
                    .index()
                    .ok_or(BoardError::GridMismatch { position: pos })?;
                let piece = self.grid[idx].ok_or(BoardError::GridMismatch { position: pos })?;
                if listed[idx] || piece.color() != color || piece.position() != pos {
                    return Err(BoardError::GridMismatch { position: pos });
                }
                listed[idx] = true;
            }
        }

        for (idx, cell) in self.grid.iter().enumerate() {
            if cell.is_some() != listed[idx] {
                return Err(BoardError::GridMismatch {
                    position: Position::from_index(idx),
                });
            }
        }

        for color in PieceColor::BOTH {
            let kings: Vec<Position> = self
                .pieces(color)
                .iter()
                .filter(|p| p.kind() == PieceKind::King)
                .map(|p| p.position())
                .collect();
            if kings.len() != 1 || self.king_position(color) != Some(kings[0]) {
                return Err(BoardError::KingCount {
                    color,
                    count: kings.len(),
                });
            }
        }

        Ok(())
    }
}
