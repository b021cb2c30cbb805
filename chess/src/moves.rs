//! Moves and move candidates

use crate::board::Board;
use crate::movegen;
use crate::types::{Color, Square, SquareParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What happens to the destination square of a move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveEffect {
    /// Destination square is empty
    Quiet,
    /// Destination square holds an enemy piece, which is removed
    Capture,
}

/// Destination square reachable by some piece, together with the effect of moving there
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub dst: Square,
    pub effect: MoveEffect,
}

impl MoveCandidate {
    #[inline]
    pub const fn quiet(dst: Square) -> Self {
        MoveCandidate {
            dst,
            effect: MoveEffect::Quiet,
        }
    }

    #[inline]
    pub const fn capture(dst: Square) -> Self {
        MoveCandidate {
            dst,
            effect: MoveEffect::Capture,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.effect == MoveEffect::Capture
    }
}

/// Error indicating that a move cannot be made
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum IllegalMove {
    /// There is no piece on the source square
    #[error("no piece on {0}")]
    EmptySource(Square),
    /// The piece on the source square doesn't belong to the side to move
    #[error("piece belongs to {found:?}, but {expected:?} is to move")]
    WrongSide { expected: Color, found: Color },
    /// The destination square is not among the candidates of the piece
    #[error("{dst} is not reachable from {src}")]
    Unreachable { src: Square, dst: Square },
}

/// Error parsing a move from text
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(SquareParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(SquareParseError),
}

/// Move of a piece from one square to another
///
/// A move is just a pair of squares. Whether it can be made depends on the position, see
/// [`Move::validate()`].
///
/// Moves are formatted and parsed as the two squares written one after another, e.g. `e2e4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
}

impl Move {
    #[inline]
    pub const fn new(src: Square, dst: Square) -> Move {
        Move { src, dst }
    }

    /// Parses a move from text
    ///
    /// Does the same as [`Move::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_text(s: &str) -> Result<Move, MoveParseError> {
        Move::from_str(s)
    }

    /// Checks that the move can be made in position `b` by side `side`
    ///
    /// On success, returns the matching candidate produced by the move generator.
    pub fn validate(&self, b: &Board, side: Color) -> Result<MoveCandidate, IllegalMove> {
        let piece = b.at(self.src).ok_or(IllegalMove::EmptySource(self.src))?;
        if piece.color != side {
            return Err(IllegalMove::WrongSide {
                expected: side,
                found: piece.color,
            });
        }
        movegen::generate(b, self.src)
            .find(self.dst)
            .ok_or(IllegalMove::Unreachable {
                src: self.src,
                dst: self.dst,
            })
    }

    /// Returns `true` if the move can be made in position `b` by side `side`
    #[inline]
    pub fn is_legal(&self, b: &Board, side: Color) -> bool {
        self.validate(b, side).is_ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Square::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Square::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        Ok(Move { src, dst })
    }
}
