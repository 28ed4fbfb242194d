mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::{CastleSide, KING_HOME_FILE};

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Move, Piece, PieceColor, PieceKind, Position};

impl Piece {
    /// Moves this piece may make on `board` without leaving its own king
    /// in check.
    ///
    /// A piece that no longer stands on its recorded square (captured, or a
    /// snapshot from another board) has no moves.
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        if !self.is_live_on(board) {
            return Vec::new();
        }
        self.pseudo_legal_moves(board)
            .into_iter()
            .filter(|mv| !board.leaves_king_in_check(mv))
            .collect()
    }

    /// Squares this piece threatens, regardless of what stands on them and
    /// of whether moving there would expose its own king.
    #[must_use]
    pub fn attack_positions(&self, board: &Board) -> Vec<Position> {
        match self.kind() {
            PieceKind::Pawn => pawns::pawn_attacks(self),
            PieceKind::Knight => knights::knight_attacks(self),
            PieceKind::Bishop => sliders::ray_attacks(self, board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => sliders::ray_attacks(self, board, &ROOK_DIRECTIONS),
            PieceKind::Queen => sliders::ray_attacks(self, board, &QUEEN_DIRECTIONS),
            PieceKind::King => kings::king_attacks(self),
        }
    }

    /// Moves that follow the piece's geometry and occupancy rules, before
    /// the self-check filter.
    pub(crate) fn pseudo_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => pawns::pawn_moves(self, board),
            PieceKind::Knight => knights::knight_moves(self, board),
            PieceKind::Bishop => sliders::ray_moves(self, board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => sliders::ray_moves(self, board, &ROOK_DIRECTIONS),
            PieceKind::Queen => sliders::ray_moves(self, board, &QUEEN_DIRECTIONS),
            PieceKind::King => kings::king_moves(self, board),
        }
    }

    fn is_live_on(&self, board: &Board) -> bool {
        board
            .piece_at(self.position())
            .is_some_and(|occupant| occupant.same_identity(self))
    }
}

impl Board {
    /// All legal moves of `color`, piece by piece in roster order.
    #[must_use]
    pub fn legal_moves(&self, color: PieceColor) -> Vec<Move> {
        self.pieces(color)
            .iter()
            .flat_map(|piece| piece.legal_moves(self))
            .collect()
    }

    /// Legal moves of whatever piece stands on `pos`.
    #[must_use]
    pub fn piece_legal_moves(&self, pos: Position) -> Vec<Move> {
        self.piece_at(pos)
            .map(|piece| piece.legal_moves(self))
            .unwrap_or_default()
    }

    /// Play `mv` on a throwaway copy and report whether the mover's king is
    /// attacked afterwards. `self` is never touched.
    pub(crate) fn leaves_king_in_check(&self, mv: &Move) -> bool {
        let color = mv.piece().color();
        let mut sandbox = self.clone();
        if sandbox.apply(mv).is_err() {
            return true;
        }
        sandbox.is_in_check(color)
    }

    /// Count leaf nodes of the legal move tree, alternating sides starting
    /// with `to_move`.
    #[must_use]
    pub fn perft(&self, to_move: PieceColor, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            let mut child = self.clone();
            if child.apply(mv).is_ok() {
                nodes += child.perft(to_move.opponent(), depth - 1);
            }
        }
        nodes
    }
}
