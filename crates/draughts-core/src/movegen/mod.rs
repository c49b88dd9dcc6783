//! 指し手生成
//!
//! 取れる駒があれば取る手のみが合法（強制取り）。
//! 連続取りの 2 手目以降は `piece_moves` で着地マスの駒だけを調べる。

mod generator;
mod movelist;

pub use generator::{MoveGenerator, piece_moves};
pub use movelist::MoveList;

/// 斜め 4 方向（行, 列）
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
