//! 指し手リスト

use smallvec::SmallVec;

use crate::types::Move;

/// 指し手リストのインライン容量
///
/// 8×8 盤では 1 局面の合法手がこれを超えることはまれ。
const INLINE_CAPACITY: usize = 32;

/// 合法手の集合と、それが取る手かどうかのフラグ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: SmallVec<[Move; INLINE_CAPACITY]>,
    has_captures: bool,
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// 取る手のリストかどうか（true なら全要素が取る手）
    #[inline]
    pub fn has_captures(&self) -> bool {
        self.has_captures
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// 移動元・移動先が一致する手を返す（取られる駒のマスが補完される）
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.moves.iter().find(|m| *m == mv).copied()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.find(mv).is_some()
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// 取る手が見つかった時点で、それまでの取らない手を捨てる
    pub(crate) fn append(&mut self, other: MoveList) {
        if other.has_captures && !self.has_captures {
            self.moves.clear();
            self.has_captures = true;
        }
        if other.has_captures == self.has_captures {
            self.moves.extend(other.moves);
        }
    }

    pub(crate) fn set_has_captures(&mut self, has_captures: bool) {
        self.has_captures = has_captures;
    }

    pub(crate) fn moves_mut(&mut self) -> &mut [Move] {
        &mut self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
