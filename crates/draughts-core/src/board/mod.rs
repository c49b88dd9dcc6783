//! 盤面スナップショット
//!
//! `Board` は `Copy` な値型で、指し手の適用は常に新しい盤面を返す。
//! 探索の各分岐は自分専用のコピーを受け取るので、兄弟ノード間で状態を共有しない。

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{BOARD_SIZE, Color, Move, Piece, Square};

/// 8×8 の盤面
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 初期配置（黒は 0〜2 行目、白は 5〜7 行目の暗いマス）
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            let (x, y) = sq.index();
            board.cells[x][y] = match sq.x() {
                0..=2 => Some(Piece::BLACK_MAN),
                5..=7 => Some(Piece::WHITE_MAN),
                _ => None,
            };
        }
        board
    }

    /// 整数コードの 8×8 配列から生成（0 = 空, 1〜4 = 駒）
    pub fn from_codes(codes: &[[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Board> {
        let mut board = Board::empty();
        for sq in Square::all() {
            let (x, y) = sq.index();
            let code = codes[x][y];
            if code == 0 {
                continue;
            }
            let piece = Piece::from_code(code).ok_or_else(|| {
                Error::InvalidConfig(format!("unknown piece code {code} at {sq}"))
            })?;
            board.cells[x][y] = Some(piece);
        }
        Ok(board)
    }

    /// 整数コードの 8×8 配列に変換
    pub fn to_codes(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (x, row) in self.cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                codes[x][y] = cell.map_or(0, Piece::code);
            }
        }
        codes
    }

    /// テキスト図から生成
    ///
    /// 8 行 × 8 文字。`.` は空マス、`w`/`b` は兵、`W`/`B` は王。
    /// 空白と空行は無視する。
    pub fn from_diagram(diagram: &str) -> Result<Board> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE || rows.iter().any(|row| row.len() != BOARD_SIZE) {
            return Err(Error::InvalidConfig(format!(
                "board diagram must be {BOARD_SIZE}x{BOARD_SIZE}"
            )));
        }
        let mut board = Board::empty();
        for (x, row) in rows.iter().enumerate() {
            for (y, &c) in row.iter().enumerate() {
                board.cells[x][y] = match c {
                    '.' => None,
                    _ => Some(Piece::from_char(c).ok_or_else(|| {
                        Error::InvalidConfig(format!("unknown piece character {c:?}"))
                    })?),
                };
            }
        }
        Ok(board)
    }

    /// マスの駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let (x, y) = sq.index();
        self.cells[x][y]
    }

    /// マスが空かどうか
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_none()
    }

    /// 駒を置いた（`None` なら取り除いた）盤面を返す
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Option<Piece>) -> Board {
        let (x, y) = sq.index();
        self.cells[x][y] = piece;
        self
    }

    /// 指し手を適用した盤面を返す
    ///
    /// 取られた駒を除き、兵が成る行に着いたら王にする。
    /// 移動元が空の場合は盤面をそのまま返す（呼び出し側が合法手を渡す前提）。
    #[must_use]
    pub fn with_move(self, mv: Move) -> Board {
        let Some(piece) = self.piece_on(mv.from()) else {
            return self;
        };
        let piece = if !piece.is_king() && mv.to().x() == piece.color().promotion_row() {
            piece.promote()
        } else {
            piece
        };
        let mut next = self.with_piece(mv.from(), None);
        if let Some(captured) = mv.captured() {
            next = next.with_piece(captured, None);
        }
        next.with_piece(mv.to(), Some(piece))
    }

    /// 指定色の駒を行優先で列挙
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_on(sq)
                .filter(|pc| pc.color() == color)
                .map(|pc| (sq, pc))
        })
    }

    /// 指定色の駒数
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - x)?;
            for cell in row {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
