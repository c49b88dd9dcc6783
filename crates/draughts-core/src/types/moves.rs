//! 指し手（Move）

use std::fmt;
use std::str::FromStr;

use super::{ParseSquareError, Square};

/// 1 回の駒の移動
///
/// 取る手の場合は `captured` に取られる相手駒のマスを持つ。
/// 比較は移動元と移動先のみで行い、`captured` は含めない。
/// 外部から「どの駒を取るか」を知らずに指し手を照合できるようにするため。
#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Square>,
}

impl Move {
    /// 取らない手
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// 取る手
    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Move {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn captured(self) -> Option<Square> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { ':' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseSquareError;

    /// `c3-d4` / `c3:e5` 形式を読む。取られる駒のマスはここでは分からないので、
    /// 取る手として読んだ場合も `captured` は `None` のまま（`MoveList::find` で補完する）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = s
            .split_once(['-', ':'])
            .ok_or_else(|| ParseSquareError(s.to_string()))?;
        Ok(Move::quiet(from.parse()?, to.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_move_equality_ignores_captured() {
        let plain = Move::quiet(sq(3, 4), sq(1, 2));
        let capture = Move::capture(sq(3, 4), sq(1, 2), sq(2, 3));
        assert_eq!(plain, capture);
        assert_ne!(plain, Move::quiet(sq(3, 4), sq(4, 5)));
    }

    #[test]
    fn test_move_notation() {
        let mv = Move::capture(sq(5, 2), sq(3, 4), sq(4, 3));
        assert_eq!(mv.to_string(), "c3:e5");
        let parsed: Move = "c3:e5".parse().unwrap();
        assert_eq!(parsed, mv);
        assert!(!parsed.is_capture());
        assert_eq!("c3-d4".parse::<Move>().unwrap().to_string(), "c3-d4");
        assert!("c3d4".parse::<Move>().is_err());
    }
}
