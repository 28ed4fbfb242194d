use super::super::attack_tables::king_targets;
use super::super::{Board, Move, Piece, PieceKind, Position};

/// The two castling directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// File step the king takes toward the rook.
    const fn direction(self) -> i8 {
        match self {
            CastleSide::King => 1,
            CastleSide::Queen => -1,
        }
    }

    const fn rook_file(self) -> i8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Where the rook lands: next to the king, on the side it came from.
    const fn rook_target_file(self) -> i8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// Which side a castling king move from `from` to `to` belongs to.
    pub(crate) fn of(from: Position, to: Position) -> Self {
        if to.file() > from.file() {
            CastleSide::King
        } else {
            CastleSide::Queen
        }
    }

    /// Where a castling king starting on `from` lands.
    pub(crate) const fn king_target(self, from: Position) -> Position {
        from.offset(2 * self.direction(), 0)
    }

    /// Rook origin and destination on `rank`.
    pub(crate) const fn rook_squares(self, rank: i8) -> (Position, Position) {
        (
            Position(self.rook_file(), rank),
            Position(self.rook_target_file(), rank),
        )
    }
}

/// The king's home file, where castling starts.
pub(crate) const KING_HOME_FILE: i8 = 4;

/// Steps to adjacent squares that are neither friendly nor attacked, plus
/// any castling moves.
pub(super) fn king_moves(king: &Piece, board: &Board) -> Vec<Move> {
    let color = king.color();
    let enemy = color.opponent();
    let mut moves = Vec::with_capacity(10);

    for &to in king_targets(king.position()) {
        match board.piece_at(to) {
            Some(occupant) if occupant.color() == color => {}
            occupant => {
                if !board.is_square_attacked(to, enemy) {
                    moves.push(Move::simple(*king, to, occupant));
                }
            }
        }
    }

    castling_moves(king, board, &mut moves);
    moves
}

pub(super) fn king_attacks(king: &Piece) -> Vec<Position> {
    king_targets(king.position()).to_vec()
}

fn castling_moves(king: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let color = king.color();
    let enemy = color.opponent();
    let from = king.position();
    let rank = color.home_rank();

    if king.has_moved() || from != Position(KING_HOME_FILE, rank) {
        return;
    }
    if board.is_square_attacked(from, enemy) {
        return;
    }

    for side in CastleSide::BOTH {
        let (rook_from, _) = side.rook_squares(rank);
        let rook_ready = board.piece_at(rook_from).is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved()
        });
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if rook_from.file() < from.file() {
            (rook_from.file(), from.file())
        } else {
            (from.file(), rook_from.file())
        };
        if !(lo + 1..hi).all(|file| board.is_empty(Position(file, rank))) {
            continue;
        }

        let step = side.direction();
        let passes_attack = [from.offset(step, 0), from.offset(2 * step, 0)]
            .iter()
            .any(|&sq| board.is_square_attacked(sq, enemy));
        if passes_attack {
            continue;
        }

        moves.push(Move::castle(*king, side.king_target(from)));
    }
}
