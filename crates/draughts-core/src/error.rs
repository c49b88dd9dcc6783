//! エラー型
//!
//! 「合法手がない」はエラーではなく値（空のリスト・終端スコア）として扱う。

/// エンジンのエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 盤外、または空マスに対する指し手生成要求
    #[error("invalid square ({x}, {y}): {reason}")]
    InvalidSquare { x: i8, y: i8, reason: &'static str },

    /// 探索の前提条件違反（手番側の駒がない局面など）
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// 設定値・盤面データの不正
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// エンジン操作の結果型
pub type Result<T> = std::result::Result<T, Error>;
