//! 設定ファイル
//!
//! ```json
//! {
//!   "Bot": {
//!     "IsWhiteBot": false, "IsBlackBot": true,
//!     "WhiteBotLevel": 3, "BlackBotLevel": 5,
//!     "BotScoringType": "NumberAndPotential",
//!     "Optimization": "O1",
//!     "BotDelayMS": 0,
//!     "NoRandom": false
//!   },
//!   "Game": { "MaxNumTurns": 120 }
//! }
//! ```
//!
//! 知らないセクション（`WindowSize` など）は無視する。
//!
//! `WhiteBotLevel` / `BlackBotLevel` は自分の手番のあとに読む手番数。
//! 探索深さ `max_depth` は自分の手番を含めて数えるので `level + 1` になる。

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use draughts_core::search::DEFAULT_MAX_DEPTH;
use draughts_core::{Color, ScoringMode, SearchConfig};
use serde::{Deserialize, Serialize};

/// `BotScoringType` でこの値のときだけ前進ボーナス付きの評価を使う
pub const SCORING_WITH_POTENTIAL: &str = "NumberAndPotential";
/// `Optimization` でこの値のときだけ枝刈りを切る
pub const OPTIMIZATION_NONE: &str = "O0";
/// 既定のレベル（探索深さ `DEFAULT_MAX_DEPTH` に相当）
pub const DEFAULT_BOT_LEVEL: u32 = DEFAULT_MAX_DEPTH - 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "Bot")]
    pub bot: BotSettings,
    #[serde(rename = "Game")]
    pub game: GameSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BotSettings {
    pub is_white_bot: bool,
    pub is_black_bot: bool,
    pub white_bot_level: u32,
    pub black_bot_level: u32,
    pub bot_scoring_type: String,
    pub optimization: String,
    #[serde(rename = "BotDelayMS")]
    pub bot_delay_ms: u64,
    pub no_random: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            is_white_bot: true,
            is_black_bot: true,
            white_bot_level: DEFAULT_BOT_LEVEL,
            black_bot_level: DEFAULT_BOT_LEVEL,
            bot_scoring_type: SCORING_WITH_POTENTIAL.to_string(),
            optimization: "O1".to_string(),
            bot_delay_ms: 0,
            no_random: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GameSettings {
    pub max_num_turns: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { max_num_turns: 120 }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse settings JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn is_bot(&self, color: Color) -> bool {
        match color {
            Color::White => self.bot.is_white_bot,
            Color::Black => self.bot.is_black_bot,
        }
    }

    pub fn bot_level(&self, color: Color) -> u32 {
        match color {
            Color::White => self.bot.white_bot_level,
            Color::Black => self.bot.black_bot_level,
        }
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        if self.bot.bot_scoring_type == SCORING_WITH_POTENTIAL {
            ScoringMode::MaterialAndPotential
        } else {
            ScoringMode::MaterialOnly
        }
    }

    pub fn pruning(&self) -> bool {
        self.bot.optimization != OPTIMIZATION_NONE
    }

    /// レベルに対応する探索深さ（自分の手番の分を足す）
    pub fn search_depth(&self, color: Color) -> u32 {
        self.bot_level(color).saturating_add(1)
    }

    /// `color` 側エンジンの探索設定（検証済み）
    pub fn search_config(&self, color: Color) -> Result<SearchConfig> {
        let config = SearchConfig {
            max_depth: self.search_depth(color),
            scoring_mode: self.scoring_mode(),
            pruning: self.pruning(),
        };
        config
            .validate()
            .with_context(|| format!("invalid bot level for {color}"))?;
        Ok(config)
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot.bot_delay_ms)
    }

    /// `NoRandom` なら固定シード 0
    pub fn fixed_seed(&self) -> Option<u64> {
        self.bot.no_random.then_some(0)
    }
}
