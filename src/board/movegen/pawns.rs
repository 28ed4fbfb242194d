use super::super::{Board, Move, Piece, Position};

/// Pawn advances and diagonal captures.
///
/// A pawn reaching the last rank stays a pawn and nothing is generated for
/// en passant; both rules are extension points (`Move::is_promotion`,
/// `Move::is_en_passant`) that generation never sets.
pub(super) fn pawn_moves(pawn: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);
    let color = pawn.color();
    let from = pawn.position();
    let dir = color.pawn_direction();

    let one = from.offset(0, dir);
    if board.is_empty(one) {
        moves.push(Move::simple(*pawn, one, None));
        if !pawn.has_moved() {
            let two = from.offset(0, 2 * dir);
            if board.is_empty(two) {
                moves.push(Move::simple(*pawn, two, None));
            }
        }
    }

    for to in pawn_attacks(pawn) {
        if let Some(target) = board.piece_at(to) {
            if target.color() != color {
                moves.push(Move::simple(*pawn, to, Some(target)));
            }
        }
    }

    moves
}

/// The two forward diagonals, whatever stands on them.
pub(super) fn pawn_attacks(pawn: &Piece) -> Vec<Position> {
    let from = pawn.position();
    let dir = pawn.color().pawn_direction();
    [-1, 1]
        .into_iter()
        .map(|df| from.offset(df, dir))
        .filter(|to| to.is_valid())
        .collect()
}
