//! 探索
//!
//! - ルート手番の連続取りを展開する `expand_best_chain`
//! - 相手の応手以降を読む深さ制限付きミニマックス（αβ 枝刈り）`minimax`
//!
//! どちらも連続取りの途中は同じ手番のまま ply を進めない。

mod alpha_beta;
mod config;
mod engine;
mod tree;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_MAX_DEPTH, SearchConfig};
pub use engine::{SearchEngine, SearchResult};
