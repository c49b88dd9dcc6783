mod material;

pub use material::{
    KING_VALUE, KING_VALUE_WITH_POTENTIAL, MAN_VALUE, ROW_ADVANCE_BONUS, ScoringMode, evaluate,
};
