//! Movement templates of the pieces
//!
//! Every piece kind is described by data only: a list of direction vectors and a limit on the
//! number of steps along each of them. Pawns get their own template shape, as they move and
//! capture in different directions.

use crate::geometry;
use crate::types::{Color, PieceKind, Square};

/// Offset applied to a square on each step, as `(file delta, rank delta)`
pub type Direction = (isize, isize);

/// Largest number of steps a piece can make along one direction
pub const MAX_STEPS: usize = 7;

const DIAGONAL: [Direction; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const ORTHOGONAL: [Direction; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const ALL: [Direction; 8] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
];

const KNIGHT: [Direction; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// How a piece moves from a given square
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Movement {
    /// Walk along each of `directions` for at most `limit` steps. An empty square is a quiet
    /// move, the first occupied square ends the walk and is a capture if it holds an enemy.
    Walk {
        directions: &'static [Direction],
        limit: usize,
    },
    /// Walk along `forward` for at most `limit` steps onto empty squares only. Each of
    /// `captures` is tested once and is a capture iff it holds an enemy.
    Pawn {
        forward: Direction,
        limit: usize,
        captures: [Direction; 2],
    },
}

impl Movement {
    /// Returns the number of steps allowed along each direction
    pub fn limit(&self) -> usize {
        match *self {
            Movement::Walk { limit, .. } | Movement::Pawn { limit, .. } => limit,
        }
    }
}

/// Returns the movement template for a piece of kind `kind` and color `color` standing on `src`
///
/// Only pawns depend on `color` and `src`. A pawn standing on its home rank may advance two
/// squares. This is decided by the rank alone, not by whether the pawn has already moved.
pub fn movement(kind: PieceKind, color: Color, src: Square) -> Movement {
    match kind {
        PieceKind::Pawn => {
            let fwd = geometry::pawn_forward_delta(color);
            let limit = if src.rank() == geometry::pawn_home_rank(color) {
                2
            } else {
                1
            };
            Movement::Pawn {
                forward: (0, fwd),
                limit,
                captures: [(1, fwd), (-1, fwd)],
            }
        }
        PieceKind::Knight => Movement::Walk {
            directions: &KNIGHT,
            limit: 1,
        },
        PieceKind::Bishop => Movement::Walk {
            directions: &DIAGONAL,
            limit: MAX_STEPS,
        },
        PieceKind::Rook => Movement::Walk {
            directions: &ORTHOGONAL,
            limit: MAX_STEPS,
        },
        PieceKind::Queen => Movement::Walk {
            directions: &ALL,
            limit: MAX_STEPS,
        },
        PieceKind::King => Movement::Walk {
            directions: &ALL,
            limit: 1,
        },
    }
}

/// Returns the material value of a piece of kind `kind`
pub const fn material(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 0,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_limits() {
        let d4 = Square::from_parts(File::D, Rank::R4);
        for color in [Color::White, Color::Black] {
            assert_eq!(movement(PieceKind::Knight, color, d4).limit(), 1);
            assert_eq!(movement(PieceKind::King, color, d4).limit(), 1);
            assert_eq!(movement(PieceKind::Bishop, color, d4).limit(), 7);
            assert_eq!(movement(PieceKind::Rook, color, d4).limit(), 7);
            assert_eq!(movement(PieceKind::Queen, color, d4).limit(), 7);
            assert_eq!(movement(PieceKind::Pawn, color, d4).limit(), 1);
        }
    }

    #[test]
    fn test_pawn() {
        let e2 = Square::from_parts(File::E, Rank::R2);
        let e7 = Square::from_parts(File::E, Rank::R7);
        assert_eq!(
            movement(PieceKind::Pawn, Color::White, e2),
            Movement::Pawn {
                forward: (0, -1),
                limit: 2,
                captures: [(1, -1), (-1, -1)],
            }
        );
        assert_eq!(
            movement(PieceKind::Pawn, Color::Black, e7),
            Movement::Pawn {
                forward: (0, 1),
                limit: 2,
                captures: [(1, 1), (-1, 1)],
            }
        );
        assert_eq!(movement(PieceKind::Pawn, Color::White, e7).limit(), 1);
        assert_eq!(movement(PieceKind::Pawn, Color::Black, e2).limit(), 1);
    }

    #[test]
    fn test_directions() {
        let a1 = Square::from_parts(File::A, Rank::R1);
        let dirs = |kind: PieceKind| match movement(kind, Color::White, a1) {
            Movement::Walk { directions, .. } => directions.to_vec(),
            Movement::Pawn { .. } => unreachable!(),
        };
        assert_eq!(dirs(PieceKind::Knight).len(), 8);
        assert!(dirs(PieceKind::Knight)
            .iter()
            .all(|&(df, dr)| df.abs() * dr.abs() == 2));
        assert!(dirs(PieceKind::Bishop)
            .iter()
            .all(|&(df, dr)| df.abs() == 1 && dr.abs() == 1));
        assert!(dirs(PieceKind::Rook)
            .iter()
            .all(|&(df, dr)| df.abs() + dr.abs() == 1));
        let mut queen = dirs(PieceKind::Bishop);
        queen.extend(dirs(PieceKind::Rook));
        assert_eq!(dirs(PieceKind::Queen), queen);
        assert_eq!(dirs(PieceKind::King), queen);
    }

    #[test]
    fn test_material() {
        assert_eq!(material(PieceKind::Queen), 9);
        assert_eq!(material(PieceKind::Rook), 5);
        assert_eq!(material(PieceKind::Pawn), 0);
    }
}
