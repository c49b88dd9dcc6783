//! 探索設定
//!
//! 1 回の探索の間は読み取り専用。`SearchEngine` は探索開始時にコピーを取る。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::eval::ScoringMode;

/// 既定の探索深さ
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// 探索設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 探索深さ（ルート手番の 1 手を ply 0 とし、ply がこの値に達したら静的評価）
    pub max_depth: u32,
    /// 末端の評価方法
    pub scoring_mode: ScoringMode,
    /// αβ 枝刈りの有効/無効（無効時は厳密なミニマックス値を返す）
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            scoring_mode: ScoringMode::default(),
            pruning: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
