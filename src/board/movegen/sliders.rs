use super::super::{Board, Move, Piece, Position};

/// Walk each ray from the slider's square. The first occupied square on a
/// ray ends it and is included whatever its color.
pub(super) fn ray_attacks(slider: &Piece, board: &Board, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut targets = Vec::with_capacity(14);
    let from = slider.position();
    for &(df, dr) in directions {
        let mut to = from.offset(df, dr);
        while to.is_valid() {
            targets.push(to);
            if board.piece_at(to).is_some() {
                break;
            }
            to = to.offset(df, dr);
        }
    }
    targets
}

/// Ray moves: every attacked square except those holding a friendly piece.
pub(super) fn ray_moves(slider: &Piece, board: &Board, directions: &[(i8, i8)]) -> Vec<Move> {
    let color = slider.color();
    ray_attacks(slider, board, directions)
        .into_iter()
        .filter_map(|to| match board.piece_at(to) {
            Some(occupant) if occupant.color() == color => None,
            occupant => Some(Move::simple(*slider, to, occupant)),
        })
        .collect()
}
