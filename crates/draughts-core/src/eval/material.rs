//! 駒割りによる静的評価
//!
//! 評価値は `perspective` 側から見た「自分 − 相手」。
//! 色を入れ替えると符号が反転する（`evaluate(b, White) == -evaluate(b, Black)`）。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Color, Piece, Value};

/// 兵の価値
pub const MAN_VALUE: i32 = 100;
/// 王の価値（駒数のみ）
pub const KING_VALUE: i32 = 400;
/// 王の価値（駒数 + 前進度）
pub const KING_VALUE_WITH_POTENTIAL: i32 = 500;
/// 兵が自陣から 1 行進むごとの加点
pub const ROW_ADVANCE_BONUS: i32 = 5;

/// 評価モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringMode {
    /// 駒数のみ
    MaterialOnly,
    /// 駒数 + 兵の前進度（成りへの近さ）
    #[default]
    MaterialAndPotential,
}

/// 駒 1 枚の価値
#[inline]
fn piece_value(piece: Piece, row: i8, mode: ScoringMode) -> i32 {
    match (piece.is_king(), mode) {
        (true, ScoringMode::MaterialOnly) => KING_VALUE,
        (true, ScoringMode::MaterialAndPotential) => KING_VALUE_WITH_POTENTIAL,
        (false, ScoringMode::MaterialOnly) => MAN_VALUE,
        (false, ScoringMode::MaterialAndPotential) => {
            // 自陣の最奥行からの距離
            let advanced = (row - piece.color().opponent().promotion_row()).abs();
            MAN_VALUE + ROW_ADVANCE_BONUS * i32::from(advanced)
        }
    }
}

/// 局面の静的評価
///
/// 片方の駒がなくなっていれば勝敗確定のスコアを返す。
pub fn evaluate(board: &Board, perspective: Color, mode: ScoringMode) -> Value {
    let mut material = [0i32; Color::NUM];
    let mut count = [0usize; Color::NUM];
    for color in [Color::White, Color::Black] {
        for (sq, piece) in board.pieces(color) {
            material[color.index()] += piece_value(piece, sq.x(), mode);
            count[color.index()] += 1;
        }
    }

    let us = perspective.index();
    let them = perspective.opponent().index();
    match (count[us], count[them]) {
        (0, 0) => Value::ZERO,
        (0, _) => Value::LOSS,
        (_, 0) => Value::WIN,
        _ => Value::new(material[us] - material[them]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::initial();
        for mode in [ScoringMode::MaterialOnly, ScoringMode::MaterialAndPotential] {
            assert_eq!(evaluate(&board, Color::White, mode), Value::ZERO);
            assert_eq!(evaluate(&board, Color::Black, mode), Value::ZERO);
        }
    }

    #[test]
    fn test_material_only() {
        let board = Board::empty()
            .with_piece(sq(5, 0), Some(Piece::WHITE_MAN))
            .with_piece(sq(4, 1), Some(Piece::WHITE_KING))
            .with_piece(sq(2, 1), Some(Piece::BLACK_MAN));
        assert_eq!(
            evaluate(&board, Color::White, ScoringMode::MaterialOnly),
            Value::new(MAN_VALUE + KING_VALUE - MAN_VALUE)
        );
    }

    #[test]
    fn test_potential_rewards_advancement() {
        // 白兵は 7 行目が自陣、黒兵は 0 行目が自陣
        let board = Board::empty()
            .with_piece(sq(2, 1), Some(Piece::WHITE_MAN))
            .with_piece(sq(1, 0), Some(Piece::BLACK_MAN));
        let v = evaluate(&board, Color::White, ScoringMode::MaterialAndPotential);
        assert_eq!(v, Value::new(5 * ROW_ADVANCE_BONUS - ROW_ADVANCE_BONUS));
    }

    #[test]
    fn test_empty_side_is_decisive() {
        let board = Board::empty().with_piece(sq(5, 0), Some(Piece::WHITE_MAN));
        assert_eq!(evaluate(&board, Color::White, ScoringMode::MaterialOnly), Value::WIN);
        assert_eq!(evaluate(&board, Color::Black, ScoringMode::MaterialOnly), Value::LOSS);
        assert_eq!(
            evaluate(&Board::empty(), Color::Black, ScoringMode::MaterialOnly),
            Value::ZERO
        );
    }

    #[test]
    fn test_antisymmetric_under_color_swap() {
        let board = Board::from_diagram(
            "
            ........
            b.b.....
            .b...B..
            ..w.....
            ....b...
            .W...w..
            ......w.
            w.......
            ",
        )
        .unwrap();
        for mode in [ScoringMode::MaterialOnly, ScoringMode::MaterialAndPotential] {
            assert_eq!(
                evaluate(&board, Color::White, mode),
                -evaluate(&board, Color::Black, mode)
            );
        }
    }

    #[test]
    fn test_scoring_mode_deserialize() {
        let mode: ScoringMode = serde_json::from_str("\"MaterialOnly\"").unwrap();
        assert_eq!(mode, ScoringMode::MaterialOnly);
    }
}
