use super::super::attack_tables::knight_targets;
use super::super::{Board, Move, Piece, Position};

pub(super) fn knight_moves(knight: &Piece, board: &Board) -> Vec<Move> {
    let color = knight.color();
    knight_targets(knight.position())
        .iter()
        .filter_map(|&to| match board.piece_at(to) {
            Some(occupant) if occupant.color() == color => None,
            occupant => Some(Move::simple(*knight, to, occupant)),
        })
        .collect()
}

pub(super) fn knight_attacks(knight: &Piece) -> Vec<Position> {
    knight_targets(knight.position()).to_vec()
}
