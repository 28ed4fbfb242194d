//! Property-based tests using proptest.

use crate::board::{Board, BoardBuilder, CheckStatus, Piece, PieceColor, Position};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// `board` with `keep` as is and every other piece repainted `color`.
fn repaint_others(board: &Board, keep: &Piece, color: PieceColor) -> Board {
    PieceColor::BOTH
        .iter()
        .flat_map(|&c| board.pieces(c))
        .filter(|p| p.position() != keep.position())
        .fold(
            BoardBuilder::new().piece(keep.position(), keep.color(), keep.kind()),
            |builder, p| builder.piece(p.position(), color, p.kind()),
        )
        .build()
}

/// Play up to `num_moves` random legal moves, alternating sides from White.
/// Stops early when the side to move has nothing left. Returns the side to
/// move in the final position.
fn random_game(seed: u64, num_moves: usize) -> (Board, PieceColor) {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut to_move = PieceColor::White;

    for _ in 0..num_moves {
        let moves = board.legal_moves(to_move);
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        board.make_move(mv).unwrap();
        to_move = to_move.opponent();
    }
    (board, to_move)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: grid, piece lists and king references stay consistent
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(seed, num_moves);
        prop_assert!(board.validate().is_ok());
        prop_assert!(board.history().len() <= num_moves);
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, to_move) = random_game(seed, num_moves);
        for mv in board.legal_moves(to_move) {
            let mut child = board.clone();
            child.make_move(&mv).unwrap();
            prop_assert!(!child.is_in_check(to_move), "{} exposes the king", mv);
        }
    }

    /// Property: checkmate and stalemate agree with check and move availability
    #[test]
    fn prop_terminal_states_are_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, to_move) = random_game(seed, num_moves);
        let in_check = board.is_in_check(to_move);
        let no_moves = board.legal_moves(to_move).is_empty();

        prop_assert!(!(board.is_checkmate(to_move) && board.is_stalemate(to_move)));
        prop_assert_eq!(board.is_checkmate(to_move), in_check && no_moves);
        prop_assert_eq!(board.is_stalemate(to_move), !in_check && no_moves);
        if board.is_checkmate(to_move) {
            prop_assert!(in_check);
        }
        prop_assert_eq!(board.status(to_move).is_terminal(), no_moves);
        if !no_moves {
            prop_assert_ne!(board.status(to_move), CheckStatus::Checkmated);
        }
    }

    /// Property: detection queries are pure and repeatable
    #[test]
    fn prop_queries_are_idempotent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, to_move) = random_game(seed, num_moves);
        let before = board.clone();
        let first = (board.status(to_move), board.legal_moves(to_move));
        let second = (board.status(to_move), board.legal_moves(to_move));
        prop_assert_eq!(first, second);
        prop_assert_eq!(board, before);
    }

    /// Property: attacked squares do not depend on whether the pieces around
    /// are friends or enemies
    #[test]
    fn prop_attacks_ignore_occupant_color(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(seed, num_moves);
        for color in PieceColor::BOTH {
            for piece in board.pieces(color) {
                let friendly = repaint_others(&board, &piece, color);
                let hostile = repaint_others(&board, &piece, color.opponent());
                let keep = piece.with_moved(false);
                prop_assert_eq!(
                    keep.attack_positions(&friendly),
                    keep.attack_positions(&hostile)
                );
                prop_assert_eq!(piece.attack_positions(&board), keep.attack_positions(&hostile));
            }
        }
    }

    /// Property: every capture lands on a square the capturing piece attacks
    #[test]
    fn prop_captures_land_on_attacked_squares(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(seed, num_moves);
        for color in PieceColor::BOTH {
            for piece in board.pieces(color) {
                let attacks = piece.attack_positions(&board);
                prop_assert!(attacks.iter().all(|sq| sq.is_valid()));
                let moves = piece.legal_moves(&board);
                for mv in moves.iter().filter(|mv| mv.is_capture()) {
                    prop_assert!(attacks.contains(&mv.to()));
                }
            }
        }
    }

    /// Property: moves played on a copy never reach the original
    #[test]
    fn prop_copies_are_independent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, to_move) = random_game(seed, num_moves);
        let snapshot: Vec<Option<_>> = Position::all().map(|sq| board.piece_at(sq)).collect();
        let mut copy = board.clone();
        if let Some(mv) = copy.legal_moves(to_move).first().copied() {
            copy.make_move(&mv).unwrap();
            prop_assert_ne!(&copy, &board);
        }
        let after: Vec<Option<_>> = Position::all().map(|sq| board.piece_at(sq)).collect();
        prop_assert_eq!(snapshot, after);
    }

    /// Property: a copy and its original replay the same moves identically
    #[test]
    fn prop_copy_replays_identically(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, to_move) = random_game(seed, num_moves);
        let mut original = board.clone();
        let mut copy = original.clone();
        let mut side = to_move;
        for _ in 0..4 {
            let Some(mv) = original.legal_moves(side).last().copied() else {
                break;
            };
            original.make_move(&mv).unwrap();
            copy.make_move(&mv).unwrap();
            side = side.opponent();
        }
        prop_assert_eq!(original, copy);
    }
}
