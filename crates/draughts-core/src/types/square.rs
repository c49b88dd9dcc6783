//! マス（Square）

use std::fmt;
use std::str::FromStr;

use super::BOARD_SIZE;

/// 盤上のマス
///
/// `x` は行（0 が上端）、`y` は列（0 が左端）。
/// 表記は列を `a`〜`h`、行を下端から数えた `1`〜`8` で表す（`(0, 0)` は `a8`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    x: i8,
    y: i8,
}

impl Square {
    /// 盤内なら `Some` を返す
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Square> {
        if Self::on_board(x, y) {
            Some(Square { x, y })
        } else {
            None
        }
    }

    /// 座標が盤内かどうか
    #[inline]
    pub const fn on_board(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_SIZE as i8 && y >= 0 && y < BOARD_SIZE as i8
    }

    #[inline]
    pub const fn x(self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// 配列インデックス（行, 列）
    #[inline]
    pub const fn index(self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }

    /// `(dx, dy)` だけずらしたマス（盤外なら `None`）
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::new(self.x + dx, self.y + dy)
    }

    /// 暗いマス（駒が置かれるマス）かどうか
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// 全マスを行優先で列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as i8).flat_map(|x| (0..BOARD_SIZE as i8).map(move |y| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.y as u8) as char;
        let rank = BOARD_SIZE as i8 - self.x;
        write!(f, "{file}{rank}")
    }
}

/// マス表記のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation: {0:?}")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(err());
        }
        let y = (file as u8 - b'a') as i8;
        let x = BOARD_SIZE as i8 - (rank as u8 - b'0') as i8;
        Square::new(x, y).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_square_notation() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(sq.to_string(), "a8");
        let sq = Square::new(7, 2).unwrap();
        assert_eq!(sq.to_string(), "c1");
        assert_eq!("c1".parse::<Square>().unwrap(), sq);
        assert_eq!("h8".parse::<Square>().unwrap(), Square::new(0, 7).unwrap());
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_dark() {
        assert!(!Square::new(0, 0).unwrap().is_dark());
        assert!(Square::new(0, 1).unwrap().is_dark());
    }
}
