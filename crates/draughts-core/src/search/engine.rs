//! 探索エンジン（ルート側の連続取り展開）

use std::time::Instant;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::movegen::{MoveGenerator, piece_moves};
use crate::types::{Color, Move, Square, Value};

use super::config::SearchConfig;
use super::tree::{NodeId, SearchTree};

/// 探索結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// 最善の 1 手番分の手順（取らない手 1 つ、または連続取り）。合法手がなければ空。
    pub moves: Vec<Move>,
    /// ルート手番から見た評価値
    pub score: Value,
    /// 訪問ノード数
    pub nodes: u64,
}

/// 探索エンジン
///
/// 設定は `&mut self` 経由でしか変更できないため、探索中に書き換わることはない。
pub struct SearchEngine {
    config: SearchConfig,
    movegen: MoveGenerator,
}

impl SearchEngine {
    /// 設定と指し手生成器（乱数源）を指定して生成
    pub fn new(config: SearchConfig, movegen: MoveGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, movegen })
    }

    /// シード固定のエンジン
    pub fn with_seed(config: SearchConfig, seed: u64) -> Result<Self> {
        Self::new(config, MoveGenerator::new(seed))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 次回の探索から使う設定を差し替える
    pub fn set_config(&mut self, config: SearchConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// `color` の最善手順（1 手番分）
    ///
    /// 合法手がなければ空の手順を返す。終局判定は呼び出し側で行う。
    pub fn best_turn_sequence(&mut self, board: &Board, color: Color) -> Result<Vec<Move>> {
        Ok(self.search(board, color)?.moves)
    }

    /// `color` の最善手順と評価値
    pub fn search(&mut self, board: &Board, color: Color) -> Result<SearchResult> {
        if board.count(color) == 0 {
            return Err(Error::PreconditionViolation(format!("{color} has no pieces on the board")));
        }

        let start = Instant::now();
        let mut worker = SearchWorker::new(self.config, &mut self.movegen, color);
        let result = worker.run(board);

        log::debug!(
            "search {color} depth={} pruning={} score={} nodes={} tree={} time={}ms turn=[{}]",
            self.config.max_depth,
            self.config.pruning,
            result.score,
            result.nodes,
            worker.tree.len(),
            start.elapsed().as_millis(),
            result.moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" "),
        );
        Ok(result)
    }
}

/// 探索 1 回分の作業領域
pub(super) struct SearchWorker<'a> {
    pub(super) config: SearchConfig,
    pub(super) movegen: &'a mut MoveGenerator,
    /// 探索を開始した手番（評価値はこの側から見る）
    pub(super) root: Color,
    pub(super) tree: SearchTree,
    pub(super) nodes: u64,
}

impl<'a> SearchWorker<'a> {
    pub(super) fn new(config: SearchConfig, movegen: &'a mut MoveGenerator, root: Color) -> Self {
        Self {
            config,
            movegen,
            root,
            tree: SearchTree::new(),
            nodes: 0,
        }
    }

    pub(super) fn run(&mut self, board: &Board) -> SearchResult {
        let root_node = self.tree.alloc();
        let score = self.expand_best_chain(board, None, root_node, -Value::INFINITE);
        SearchResult {
            moves: self.tree.principal_chain(),
            score,
            nodes: self.nodes,
        }
    }

    /// ルート手番の手を展開する
    ///
    /// 取る手なら着地マスからの連続取りを同じ手番のまま再帰的に展開し、
    /// 連続取りが終わった時点で相手の応手を `minimax` で読む。
    /// 取らない手なら 1 手指してすぐ相手番に渡す。
    /// 各ノードには最もスコアの高い手（同点なら先に見た手）と続きのノードを記録する。
    fn expand_best_chain(
        &mut self,
        board: &Board,
        forced: Option<Square>,
        node: NodeId,
        alpha: Value,
    ) -> Value {
        self.nodes += 1;
        let list = match forced {
            Some(sq) => piece_moves(board, sq),
            None => self.movegen.moves_for(board, self.root),
        };

        if forced.is_some() && !list.has_captures() {
            return self.minimax(board, self.root.opponent(), 1, alpha, Value::INFINITE, None);
        }
        if list.is_empty() {
            return Value::LOSS;
        }

        let has_captures = list.has_captures();
        let mut best = -Value::INFINITE;
        for mv in list {
            let next = board.with_move(mv);
            let window = alpha.max(best);
            #[cfg(feature = "search-stats")]
            let nodes_before = self.nodes;

            let (score, child) = if has_captures {
                let child = self.tree.alloc();
                (self.expand_best_chain(&next, Some(mv.to()), child, window), Some(child))
            } else {
                let score =
                    self.minimax(&next, self.root.opponent(), 1, window, Value::INFINITE, None);
                (score, None)
            };

            #[cfg(feature = "search-stats")]
            log::trace!(
                "node {node} move {mv} score={score} nodes={}",
                self.nodes - nodes_before
            );

            if score > best {
                best = score;
                self.tree.record(node, mv, child);
            }
        }
        best
    }
}
