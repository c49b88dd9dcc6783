//! ルート側連続取りの最善手チェーン
//!
//! ノードごとに「選んだ手」と「続きのノード番号」を持つ。
//! ノード番号は追加順で、0 が常にルート。ポインタで木を作らず、
//! 2 本の追加専用配列で表す。探索 1 回ごとに作り直す。

use crate::types::Move;

pub(super) type NodeId = usize;

#[derive(Debug, Default)]
pub(super) struct SearchTree {
    best_move: Vec<Option<Move>>,
    next_node: Vec<Option<NodeId>>,
}

impl SearchTree {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// 空のノードを追加してその番号を返す
    pub(super) fn alloc(&mut self) -> NodeId {
        self.best_move.push(None);
        self.next_node.push(None);
        self.best_move.len() - 1
    }

    /// `node` の最善手と続きのノードを記録
    pub(super) fn record(&mut self, node: NodeId, mv: Move, next: Option<NodeId>) {
        self.best_move[node] = Some(mv);
        self.next_node[node] = next;
    }

    pub(super) fn len(&self) -> usize {
        self.best_move.len()
    }

    /// ルートから最善手をたどった手順
    pub(super) fn principal_chain(&self) -> Vec<Move> {
        let mut chain = Vec::new();
        let mut cur = Some(0);
        while let Some(node) = cur {
            let Some(Some(mv)) = self.best_move.get(node) else {
                break;
            };
            chain.push(*mv);
            cur = self.next_node[node];
        }
        chain
    }
}
