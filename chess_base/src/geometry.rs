use crate::types::{Color, Rank};

/// Rank where the pieces of color `c` stand initially
pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// Rank where the pawns of color `c` stand initially
///
/// A pawn standing on this rank may advance two squares.
pub const fn pawn_home_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Change of the rank index when a pawn of color `c` advances one square
///
/// White moves toward decreasing rank index, Black toward increasing one.
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}
