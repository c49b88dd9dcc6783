//! # draughts-core
//!
//! 8×8 チェッカー（ドラフツ）のエンジンコア。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Piece, Square, Move, Value）
//! - `board`: 盤面スナップショット
//! - `movegen`: 合法手生成（強制取り・王の長距離取り）
//! - `eval`: 静的評価
//! - `search`: ミニマックス探索（αβ 枝刈り）
//!
//! 盤面は `Copy` な値で、探索は呼び出し側の盤面を書き換えない。
//! 選ばれた手順を実際の盤面に適用するのは呼び出し側の役目。

pub mod types;

pub mod board;
pub mod error;

pub mod movegen;

pub mod eval;

pub mod search;

pub use board::Board;
pub use error::{Error, Result};
pub use eval::{ScoringMode, evaluate};
pub use movegen::{MoveGenerator, MoveList};
pub use search::{SearchConfig, SearchEngine, SearchResult};
pub use types::{Color, Move, Piece, PieceRank, Square, Value};
