//! 指し手生成器

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Color, Move, Piece, PieceRank, Square};

use super::DIAGONALS;
use super::movelist::MoveList;

// ============================================================================
// 駒種別の移動生成
// ============================================================================

/// 兵の取る手（後ろ向きも可）
fn generate_man_captures(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for (dx, dy) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(dx, dy), from.offset(2 * dx, 2 * dy)) else {
            continue;
        };
        if !board.is_empty(to) {
            continue;
        }
        match board.piece_on(over) {
            Some(pc) if pc.color() != piece.color() => list.push(Move::capture(from, to, over)),
            _ => {}
        }
    }
}

/// 兵の取らない手（前方 1 マスのみ）
fn generate_man_quiets(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    let dx = piece.color().forward();
    for dy in [-1, 1] {
        if let Some(to) = from.offset(dx, dy) {
            if board.is_empty(to) {
                list.push(Move::quiet(from, to));
            }
        }
    }
}

/// 王の取る手
///
/// 空マスを滑って相手駒をちょうど 1 枚飛び越え、その先の空マスならどこにでも着地できる。
/// 飛び越える前後に別の駒（色を問わない）があればその方向は打ち切り。
fn generate_king_captures(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for (dx, dy) in DIAGONALS {
        let mut jumped: Option<Square> = None;
        let mut cur = from.offset(dx, dy);
        while let Some(sq) = cur {
            match board.piece_on(sq) {
                Some(pc) if pc.color() == piece.color() || jumped.is_some() => break,
                Some(_) => jumped = Some(sq),
                None => {
                    if let Some(over) = jumped {
                        list.push(Move::capture(from, sq, over));
                    }
                }
            }
            cur = sq.offset(dx, dy);
        }
    }
}

/// 王の取らない手（駒に当たるまで滑る）
fn generate_king_quiets(board: &Board, from: Square, list: &mut MoveList) {
    for (dx, dy) in DIAGONALS {
        let mut cur = from.offset(dx, dy);
        while let Some(sq) = cur {
            if !board.is_empty(sq) {
                break;
            }
            list.push(Move::quiet(from, sq));
            cur = sq.offset(dx, dy);
        }
    }
}

/// 1 つの駒の合法手
///
/// 取る手があれば取る手のみ、なければ取らない手を返す。空マスなら空のリスト。
pub fn piece_moves(board: &Board, from: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = board.piece_on(from) else {
        return list;
    };

    match piece.rank() {
        PieceRank::Man => generate_man_captures(board, from, piece, &mut list),
        PieceRank::King => generate_king_captures(board, from, piece, &mut list),
    }
    if !list.is_empty() {
        list.set_has_captures(true);
        return list;
    }

    match piece.rank() {
        PieceRank::Man => generate_man_quiets(board, from, piece, &mut list),
        PieceRank::King => generate_king_quiets(board, from, &mut list),
    }
    list
}

// ============================================================================
// MoveGenerator
// ============================================================================

/// 手番側全体の指し手生成器
///
/// 評価が同点の手の選択に偏りが出ないよう、`moves_for` の結果はシャッフルする。
/// 乱数はシード指定可能な Xoshiro256++ で、同じシード・同じ呼び出し順なら結果も同じ。
#[derive(Clone, Debug)]
pub struct MoveGenerator {
    rng: Xoshiro256PlusPlus,
}

impl MoveGenerator {
    /// シードを指定して生成
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// OS の乱数からシードを取って生成
    pub fn from_entropy() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
        }
    }

    /// `(x, y)` の駒の合法手
    ///
    /// 盤外・空マスなら `Error::InvalidSquare`。
    pub fn moves_from(&self, board: &Board, x: i8, y: i8) -> Result<MoveList> {
        let sq = Square::new(x, y).ok_or(Error::InvalidSquare {
            x,
            y,
            reason: "off board",
        })?;
        if board.is_empty(sq) {
            return Err(Error::InvalidSquare {
                x,
                y,
                reason: "empty square",
            });
        }
        Ok(piece_moves(board, sq))
    }

    /// `color` の全駒の合法手（強制取りを適用し、順序はシャッフル）
    pub fn moves_for(&mut self, board: &Board, color: Color) -> MoveList {
        let mut list = MoveList::new();
        for (sq, _) in board.pieces(color) {
            list.append(piece_moves(board, sq));
        }
        list.moves_mut().shuffle(&mut self.rng);
        list
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn sorted(list: &MoveList) -> Vec<String> {
        let mut v: Vec<String> = list.iter().map(|m| m.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_initial_position_moves() {
        let mut movegen = MoveGenerator::new(1);
        let board = Board::initial();
        let white = movegen.moves_for(&board, Color::White);
        assert_eq!(white.len(), 7);
        assert!(!white.has_captures());
        assert!(white.iter().all(|m| m.from().x() == 5 && m.to().x() == 4));

        let black = movegen.moves_for(&board, Color::Black);
        assert_eq!(black.len(), 7);
        assert!(black.iter().all(|m| m.from().x() == 2 && m.to().x() == 3));
    }

    #[test]
    fn test_moves_from_invalid_square() {
        let movegen = MoveGenerator::new(1);
        let board = Board::initial();
        assert_eq!(
            movegen.moves_from(&board, 8, 0),
            Err(Error::InvalidSquare {
                x: 8,
                y: 0,
                reason: "off board"
            })
        );
        assert!(matches!(
            movegen.moves_from(&board, 4, 1),
            Err(Error::InvalidSquare { reason: "empty square", .. })
        ));
        // 端の兵は前に 1 手のみ
        let list = movegen.moves_from(&board, 5, 0).unwrap();
        assert_eq!(sorted(&list), vec!["a3-b4"]);
    }

    #[test]
    fn test_man_captures_backward() {
        // 白兵 (4,3) の後ろ (5,4) に黒兵
        let board = Board::empty()
            .with_piece(sq(4, 3), Some(Piece::WHITE_MAN))
            .with_piece(sq(5, 4), Some(Piece::BLACK_MAN));
        let list = piece_moves(&board, sq(4, 3));
        assert!(list.has_captures());
        assert_eq!(list.as_slice(), &[Move::capture(sq(4, 3), sq(6, 5), sq(5, 4))]);
    }

    #[test]
    fn test_man_capture_blocked_landing() {
        let board = Board::empty()
            .with_piece(sq(4, 3), Some(Piece::WHITE_MAN))
            .with_piece(sq(3, 4), Some(Piece::BLACK_MAN))
            .with_piece(sq(2, 5), Some(Piece::BLACK_MAN));
        let list = piece_moves(&board, sq(4, 3));
        assert!(!list.has_captures());
        assert_eq!(list.as_slice(), &[Move::quiet(sq(4, 3), sq(3, 2))]);
    }

    #[test]
    fn test_man_does_not_capture_own_piece() {
        let board = Board::empty()
            .with_piece(sq(4, 3), Some(Piece::WHITE_MAN))
            .with_piece(sq(3, 4), Some(Piece::WHITE_MAN));
        let list = piece_moves(&board, sq(4, 3));
        assert!(!list.has_captures());
    }

    #[test]
    fn test_king_slides_until_blocked() {
        let board = Board::empty()
            .with_piece(sq(7, 0), Some(Piece::WHITE_KING))
            .with_piece(sq(3, 4), Some(Piece::WHITE_MAN));
        let list = piece_moves(&board, sq(7, 0));
        assert!(!list.has_captures());
        assert_eq!(sorted(&list), vec!["a1-b2", "a1-c3", "a1-d4"]);
    }

    #[test]
    fn test_king_capture_lands_anywhere_beyond() {
        let board = Board::empty()
            .with_piece(sq(7, 0), Some(Piece::WHITE_KING))
            .with_piece(sq(4, 3), Some(Piece::BLACK_MAN));
        let list = piece_moves(&board, sq(7, 0));
        assert!(list.has_captures());
        assert_eq!(sorted(&list), vec!["a1:e5", "a1:f6", "a1:g7", "a1:h8"]);
        assert!(list.iter().all(|m| m.captured() == Some(sq(4, 3))));
    }

    #[test]
    fn test_king_cannot_jump_two_pieces() {
        // 相手駒の直後に自駒があると着地できない
        let board = Board::empty()
            .with_piece(sq(7, 0), Some(Piece::BLACK_KING))
            .with_piece(sq(5, 2), Some(Piece::WHITE_MAN))
            .with_piece(sq(4, 3), Some(Piece::BLACK_MAN));
        let list = piece_moves(&board, sq(7, 0));
        assert!(!list.has_captures());
        assert_eq!(sorted(&list), vec!["a1-b2"]);

        // 相手駒が 2 枚並んでいても同様
        let board = board.with_piece(sq(4, 3), Some(Piece::WHITE_MAN));
        assert!(!piece_moves(&board, sq(7, 0)).has_captures());
    }

    #[test]
    fn test_mandatory_capture_excludes_quiet_moves() {
        let board = Board::empty()
            .with_piece(sq(6, 1), Some(Piece::WHITE_MAN))
            .with_piece(sq(4, 3), Some(Piece::WHITE_MAN))
            .with_piece(sq(3, 4), Some(Piece::BLACK_MAN))
            .with_piece(sq(0, 7), Some(Piece::BLACK_MAN));
        let mut movegen = MoveGenerator::new(7);
        let list = movegen.moves_for(&board, Color::White);
        assert!(list.has_captures());
        assert_eq!(list.as_slice(), &[Move::capture(sq(4, 3), sq(2, 5), sq(3, 4))]);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let board = Board::initial();
        let a = MoveGenerator::new(42).moves_for(&board, Color::White);
        let b = MoveGenerator::new(42).moves_for(&board, Color::White);
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(sorted(&a), sorted(&MoveGenerator::new(43).moves_for(&board, Color::White)));
    }
}
