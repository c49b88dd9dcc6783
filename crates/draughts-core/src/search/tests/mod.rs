//! 探索のテスト

mod root_chain;

use crate::board::Board;
use crate::eval::ScoringMode;
use crate::search::{SearchConfig, SearchEngine};
use crate::types::Square;

pub(super) fn sq(x: i8, y: i8) -> Square {
    Square::new(x, y).unwrap()
}

pub(super) fn engine(max_depth: u32, pruning: bool, seed: u64) -> SearchEngine {
    let config = SearchConfig {
        max_depth,
        scoring_mode: ScoringMode::MaterialAndPotential,
        pruning,
    };
    SearchEngine::with_seed(config, seed).unwrap()
}

/// 中盤の局面（取り合いが起きやすい）
pub(super) fn midgame() -> Board {
    Board::from_diagram(
        "
        .b.b.b..
        ..b.b.b.
        .b...b.b
        b.b.....
        ...w.w..
        w.w...w.
        .w.w.w.w
        ........
        ",
    )
    .unwrap()
}
