//! 評価値（Value）
//!
//! 値は常に探索を開始した側（ルート手番）から見たスコア。
//! `WIN` 付近は勝敗確定のスコアとして予約している。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 勝ち（相手が動けない・駒がない）
    pub const WIN: Value = Value(30000);
    /// 負け
    pub const LOSS: Value = Value(-30000);
    /// 無限大（探索窓の初期値）
    ///
    /// 枝刈り時の ±1 シグナルを含めても `WIN` 系の値がここに届かないこと。
    pub const INFINITE: Value = Value(32001);

    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// 勝敗確定のスコアかどうか
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= Self::LOSS.0
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add<i32> for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: i32) -> Value {
        Value(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: i32) -> Value {
        Value(self.0 - rhs)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
