use std::fmt::{self, Display};
use std::hint;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square ({file}, {rank}) is outside of the board")]
    OutOfBounds { file: isize, rank: isize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board rank
///
/// Ranks are indexed from Black's back rank: [`Rank::R8`] has index 0 and
/// [`Rank::R1`] has index 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R8 = 0,
    R7 = 1,
    R6 = 2,
    R5 = 3,
    R4 = 4,
    R3 = 5,
    R2 = 6,
    R1 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R8,
            1 => Rank::R7,
            2 => Rank::R6,
            3 => Rank::R5,
            4 => Rank::R4,
            5 => Rank::R3,
            6 => Rank::R2,
            7 => Rank::R1,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from('8') - u32::from(c)) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'8' - *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Square on the board
///
/// Every value of this type is inside the board, so the rest of the crate never
/// needs to bounds-check a `Square`. Raw coordinates coming from the outside are
/// validated with [`Square::try_new()`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const unsafe fn from_index_unchecked(val: usize) -> Square {
        Square(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Square {
        Square(((rank as u8) << 3) | file as u8)
    }

    /// Returns `true` if both `file` and `rank` are in `0..8`
    pub const fn in_bounds(file: isize, rank: isize) -> bool {
        file >= 0 && file < 8 && rank >= 0 && rank < 8
    }

    /// Builds a square from raw file and rank indices
    ///
    /// This is the entry point for coordinates coming from the outside (e.g. a
    /// screen position mapped to a board cell).
    pub fn try_new(file: isize, rank: isize) -> Result<Square, SquareError> {
        if !Self::in_bounds(file, rank) {
            return Err(SquareError::OutOfBounds { file, rank });
        }
        Ok(Square::from_parts(
            File::from_index(file as usize),
            Rank::from_index(rank as usize),
        ))
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn try_shift(self, delta_file: isize, delta_rank: isize) -> Option<Square> {
        let new_file = self.file().index() as isize + delta_file;
        let new_rank = self.rank().index() as isize + delta_rank;
        Square::try_new(new_file, new_rank).ok()
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Square({})", self);
        }
        write!(f, "Square(?{:?})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file_ch), Some(rank_ch), None) => (file_ch, rank_ch),
            _ => return Err(SquareParseError::BadLength),
        };
        Ok(Square::from_parts(
            File::from_char(file_ch).ok_or(SquareParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(SquareParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(ColorParseError::BadLength),
        };
        Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    /// Returns `true` for pieces that keep moving along a direction until blocked
    pub const fn is_sliding(&self) -> bool {
        matches!(*self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    pub fn as_char(&self) -> char {
        b"PNBRQK"[self.index()] as char
    }
}

/// Piece of some kind and color
///
/// Pieces have no identity: two pieces of the same kind and color are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { kind, color }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|c| PieceKind::ALL.into_iter().map(move |k| Piece::new(c, k)))
    }

    pub fn as_char(&self) -> char {
        match self.color {
            Color::White => self.kind.as_char(),
            Color::Black => self.kind.as_char().to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        let white = ['♙', '♘', '♗', '♖', '♕', '♔'];
        let black = ['♟', '♞', '♝', '♜', '♛', '♚'];
        match self.color {
            Color::White => white[self.kind.index()],
            Color::Black => black[self.kind.index()],
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Piece({})", self.as_char())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(PieceParseError::BadLength),
        };
        Piece::from_char(ch).ok_or(PieceParseError::UnexpectedChar(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
            assert_eq!(File::from_char(file.as_char()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
        assert_eq!(Rank::R8.index(), 0);
        assert_eq!(Rank::R1.index(), 7);
    }

    #[test]
    fn test_square() {
        let mut squares = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let sq = Square::from_parts(file, rank);
                assert_eq!(sq.file(), file);
                assert_eq!(sq.rank(), rank);
                squares.push(sq);
            }
        }
        assert_eq!(squares, Square::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_square_bounds() {
        assert_eq!(
            Square::try_new(4, 6),
            Ok(Square::from_parts(File::E, Rank::R2))
        );
        assert_eq!(
            Square::try_new(0, 0),
            Ok(Square::from_parts(File::A, Rank::R8))
        );
        assert_eq!(
            Square::try_new(8, 0),
            Err(SquareError::OutOfBounds { file: 8, rank: 0 })
        );
        assert_eq!(
            Square::try_new(3, -1),
            Err(SquareError::OutOfBounds { file: 3, rank: -1 })
        );
        assert!(Square::in_bounds(7, 7));
        assert!(!Square::in_bounds(-1, 7));

        let h1 = Square::from_parts(File::H, Rank::R1);
        assert_eq!(h1.try_shift(1, 0), None);
        assert_eq!(h1.try_shift(0, 1), None);
        assert_eq!(
            h1.try_shift(-1, -2),
            Some(Square::from_parts(File::G, Rank::R3))
        );
    }

    #[test]
    fn test_square_str() {
        assert_eq!(Square::from_parts(File::B, Rank::R4).to_string(), "b4");
        assert_eq!(Square::from_parts(File::A, Rank::R1).to_string(), "a1");
        assert_eq!(
            Square::from_str("e2"),
            Ok(Square::from_parts(File::E, Rank::R2))
        );
        assert_eq!(
            Square::from_str("h9"),
            Err(SquareParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Square::from_str("i4"),
            Err(SquareParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Square::from_str("e"), Err(SquareParseError::BadLength));
        assert_eq!(Square::from_str("e22"), Err(SquareParseError::BadLength));
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::White.inv(), Color::Black);
        assert_eq!(Color::Black.inv(), Color::White);
        assert_eq!(Color::from_str("w"), Ok(Color::White));
        assert_eq!(Color::from_str("b"), Ok(Color::Black));
        assert_eq!(Color::from_str("x"), Err(ColorParseError::UnexpectedChar('x')));
        assert_eq!(Color::from_str("wb"), Err(ColorParseError::BadLength));
    }

    #[test]
    fn test_piece_str() {
        assert_eq!(Piece::iter().count(), 12);
        for piece in Piece::iter() {
            let s = piece.to_string();
            assert_eq!(Piece::from_str(&s), Ok(piece));
        }
        assert_eq!(
            Piece::from_char('N'),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(
            Piece::from_char('k'),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(Piece::from_str("x"), Err(PieceParseError::UnexpectedChar('x')));
        assert_eq!(Piece::from_str("."), Err(PieceParseError::UnexpectedChar('.')));
    }

    #[test]
    fn test_sliding() {
        let sliding: Vec<_> = PieceKind::ALL
            .into_iter()
            .filter(PieceKind::is_sliding)
            .collect();
        assert_eq!(
            sliding,
            vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        );
    }
}
