//! 基本型の定義

mod color;
mod moves;
mod piece;
mod square;
mod value;

pub use color::Color;
pub use moves::Move;
pub use piece::{Piece, PieceRank};
pub use square::{ParseSquareError, Square};
pub use value::Value;

/// 盤の一辺のマス数
pub const BOARD_SIZE: usize = 8;
