//! 深さ制限付きミニマックス（αβ 枝刈り）
//!
//! ply が偶数ならルート手番（最大化）、奇数なら相手番（最小化）。
//! 連続取りの途中（`forced` あり）は同じ手番・同じ ply のまま続ける。
//!
//! 枝刈りが起きたときは正確な値ではなく、最大化側は `max + 1`、最小化側は `min - 1` を返す。
//! 親ノードがその手を選ばないことだけを伝えるシグナルで、ルートで選ばれる手の
//! スコアは枝刈りなしの探索と一致する。厳密な値が必要なら `pruning = false` で探索する。

use crate::board::Board;
use crate::eval::evaluate;
use crate::movegen::piece_moves;
use crate::types::{Color, Square, Value};

use super::engine::SearchWorker;

impl SearchWorker<'_> {
    pub(super) fn minimax(
        &mut self,
        board: &Board,
        color: Color,
        ply: u32,
        mut alpha: Value,
        mut beta: Value,
        forced: Option<Square>,
    ) -> Value {
        self.nodes += 1;
        if ply == self.config.max_depth {
            return evaluate(board, self.root, self.config.scoring_mode);
        }

        let list = match forced {
            Some(sq) => piece_moves(board, sq),
            None => self.movegen.moves_for(board, color),
        };

        // 連続取りが終わったら相手番
        if forced.is_some() && !list.has_captures() {
            return self.minimax(board, color.opponent(), ply + 1, alpha, beta, None);
        }

        // 動けない側の負け
        if list.is_empty() {
            return if color == self.root {
                Value::LOSS
            } else {
                Value::WIN
            };
        }

        let maximizing = ply % 2 == 0;
        debug_assert_eq!(maximizing, color == self.root);

        let has_captures = list.has_captures();
        let mut min_score = Value::INFINITE;
        let mut max_score = -Value::INFINITE;

        for mv in list {
            let next = board.with_move(mv);
            let score = if has_captures {
                self.minimax(&next, color, ply, alpha, beta, Some(mv.to()))
            } else {
                self.minimax(&next, color.opponent(), ply + 1, alpha, beta, None)
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);

            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }

            if self.config.pruning && alpha >= beta {
                return if maximizing {
                    max_score + 1
                } else {
                    min_score - 1
                };
            }
        }

        if maximizing { max_score } else { min_score }
    }
}
