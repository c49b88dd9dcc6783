//! ルート側の連続取り展開のテスト

use super::{engine, midgame, sq};
use crate::board::Board;
use crate::error::Error;
use crate::search::SearchConfig;
use crate::search::SearchEngine;
use crate::types::{Color, Move, Piece, Value};

#[test]
fn test_double_jump_is_returned_as_one_turn() {
    // 白兵 b2 から d4、f6 と 2 枚取れる
    let board = Board::empty()
        .with_piece(sq(6, 1), Some(Piece::WHITE_MAN))
        .with_piece(sq(5, 2), Some(Piece::BLACK_MAN))
        .with_piece(sq(3, 4), Some(Piece::BLACK_MAN));

    for depth in 1..=3 {
        let mut engine = engine(depth, true, 11);
        let result = engine.search(&board, Color::White).unwrap();
        assert_eq!(
            result.moves,
            vec![
                Move::capture(sq(6, 1), sq(4, 3), sq(5, 2)),
                Move::capture(sq(4, 3), sq(2, 5), sq(3, 4)),
            ]
        );
        assert_eq!(result.moves[0].captured(), Some(sq(5, 2)));
        assert_eq!(result.moves[1].captured(), Some(sq(3, 4)));
        assert_eq!(result.score, Value::WIN);
    }
}

#[test]
fn test_chain_hops_are_connected() {
    let board = midgame();
    for seed in 0..4 {
        for color in [Color::White, Color::Black] {
            let mut engine = engine(3, true, seed);
            let moves = engine.best_turn_sequence(&board, color).unwrap();
            assert!(!moves.is_empty());
            if moves.len() > 1 {
                assert!(moves.iter().all(|m| m.is_capture()));
            }
            for pair in moves.windows(2) {
                assert_eq!(pair[0].to(), pair[1].from());
            }
        }
    }
}

#[test]
fn test_depth_one_prefers_better_immediate_evaluation() {
    // 白は b2 の兵を進めるか、e7 の兵を成らせるかを選べる
    let board = Board::empty()
        .with_piece(sq(6, 1), Some(Piece::WHITE_MAN))
        .with_piece(sq(1, 4), Some(Piece::WHITE_MAN))
        .with_piece(sq(3, 0), Some(Piece::BLACK_MAN));

    for seed in 0..8 {
        let mut engine = engine(1, true, seed);
        let moves = engine.best_turn_sequence(&board, Color::White).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from(), sq(1, 4));
        assert_eq!(moves[0].to().x(), 0);
    }
}

#[test]
fn test_immobilized_side_gets_empty_sequence() {
    // 黒兵 b8 は白兵に囲まれて動けない
    let board = Board::empty()
        .with_piece(sq(0, 1), Some(Piece::BLACK_MAN))
        .with_piece(sq(1, 0), Some(Piece::WHITE_MAN))
        .with_piece(sq(1, 2), Some(Piece::WHITE_MAN))
        .with_piece(sq(2, 3), Some(Piece::WHITE_MAN));

    let mut engine = engine(3, true, 5);
    let result = engine.search(&board, Color::Black).unwrap();
    assert!(result.moves.is_empty());
    assert_eq!(result.score, Value::LOSS);
}

#[test]
fn test_search_without_pieces_is_precondition_violation() {
    let board = Board::empty().with_piece(sq(5, 0), Some(Piece::WHITE_MAN));
    let mut engine = engine(2, true, 0);
    assert!(matches!(
        engine.best_turn_sequence(&board, Color::Black),
        Err(Error::PreconditionViolation(_))
    ));
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(matches!(
        SearchEngine::with_seed(SearchConfig::with_depth(0), 0),
        Err(Error::InvalidConfig(_))
    ));
    let mut engine = engine(2, true, 0);
    assert!(engine.set_config(SearchConfig::with_depth(0)).is_err());
    assert_eq!(engine.config().max_depth, 2);
}

#[test]
fn test_search_does_not_modify_board() {
    let board = midgame();
    let copy = board;
    let mut engine = engine(4, true, 3);
    engine.search(&board, Color::White).unwrap();
    assert_eq!(board, copy);
}

#[test]
fn test_result_is_legal_turn() {
    let board = midgame();
    let mut engine = engine(4, true, 9);
    let moves = engine.best_turn_sequence(&board, Color::White).unwrap();

    let mut movegen = crate::movegen::MoveGenerator::new(0);
    let first = movegen.moves_for(&board, Color::White);
    let mut cur = board;
    assert!(first.contains(&moves[0]));
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            let list = crate::movegen::piece_moves(&cur, mv.from());
            assert!(list.has_captures());
            assert!(list.contains(mv));
        }
        cur = cur.with_move(*mv);
    }
    // 手順の最後で連続取りが終わっていること
    if moves[0].is_capture() {
        let last = moves[moves.len() - 1];
        assert!(!crate::movegen::piece_moves(&cur, last.to()).has_captures());
    }
}
