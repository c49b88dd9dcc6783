//! 駒（Piece）
//!
//! 盤面上の駒は整数コードでも表現できる。
//! - 1: 白の兵, 2: 黒の兵, 3: 白の王, 4: 黒の王
//!
//! 色はコードの偶奇（奇数が白）、階級は兵の基本値（2）を超えるかどうかで決まる。

use super::Color;

/// 駒の階級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceRank {
    /// 成っていない駒
    Man,
    /// 成った駒（斜めに任意距離動ける）
    King,
}

/// 駒（色 + 階級）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    rank: PieceRank,
}

impl Piece {
    pub const WHITE_MAN: Piece = Piece::new(Color::White, PieceRank::Man);
    pub const BLACK_MAN: Piece = Piece::new(Color::Black, PieceRank::Man);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceRank::King);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceRank::King);

    #[inline]
    pub const fn new(color: Color, rank: PieceRank) -> Piece {
        Piece { color, rank }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn rank(self) -> PieceRank {
        self.rank
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, PieceRank::King)
    }

    /// 成った駒を返す（王はそのまま）
    #[inline]
    pub const fn promote(self) -> Piece {
        Piece::new(self.color, PieceRank::King)
    }

    /// 整数コードに変換
    #[inline]
    pub const fn code(self) -> u8 {
        let base = match self.color {
            Color::White => 1,
            Color::Black => 2,
        };
        match self.rank {
            PieceRank::Man => base,
            PieceRank::King => base + 2,
        }
    }

    /// 整数コードから生成（0 は空マスなので `None`）
    #[inline]
    pub const fn from_code(code: u8) -> Option<Piece> {
        if code == 0 || code > 4 {
            return None;
        }
        let color = if code % 2 == 1 {
            Color::White
        } else {
            Color::Black
        };
        let rank = if code > 2 {
            PieceRank::King
        } else {
            PieceRank::Man
        };
        Some(Piece::new(color, rank))
    }

    /// 盤面表示用の文字
    pub const fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::White, PieceRank::Man) => 'w',
            (Color::Black, PieceRank::Man) => 'b',
            (Color::White, PieceRank::King) => 'W',
            (Color::Black, PieceRank::King) => 'B',
        }
    }

    pub const fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::WHITE_MAN),
            'b' => Some(Piece::BLACK_MAN),
            'W' => Some(Piece::WHITE_KING),
            'B' => Some(Piece::BLACK_KING),
            _ => None,
        }
    }
}
