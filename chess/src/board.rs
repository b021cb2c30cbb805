//! Board and related things

use crate::bitboard::Bitboard;
use crate::rules;
use crate::types::{Color, File, Piece, PieceKind, Rank, Square};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a board from text
///
/// The same error is used both for the compact placement text (see [`Board::from_str()`])
/// and for the plain grid (see [`Board::from_grid()`]).
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GridParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
    /// Too many pieces of given color
    ///
    /// No more than 16 pieces of each color is allowed.
    #[error("too many pieces of color {0:?}")]
    TooManyPieces(Color),
}

/// Chess board
///
/// The board is a dense grid of 64 slots, each holding at most one piece. It knows nothing
/// about the side to move or about the legality of moves: see [`Game`](crate::game::Game)
/// for that.
///
/// # Example
///
/// ```
/// # use gridchess::{Board, File, Rank, Square, Piece, PieceKind, Color};
/// #
/// let mut board = Board::empty();
/// let b2 = Square::from_parts(File::B, Rank::R2);
/// let b4 = Square::from_parts(File::B, Rank::R4);
/// board.place(b2, Piece::new(Color::White, PieceKind::King));
/// board.move_piece(b2, b4);
/// assert_eq!(board.to_string(), "8/8/8/8/1K6/8/8/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Returns a board without any pieces
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for color in [Color::White, Color::Black] {
            let home = crate::geometry::pawn_home_rank(color);
            let back = crate::geometry::back_rank(color);
            for file in File::iter() {
                res.place2(file, home, Piece::new(color, PieceKind::Pawn));
            }
            res.place2(File::A, back, Piece::new(color, PieceKind::Rook));
            res.place2(File::B, back, Piece::new(color, PieceKind::Knight));
            res.place2(File::C, back, Piece::new(color, PieceKind::Bishop));
            res.place2(File::D, back, Piece::new(color, PieceKind::Queen));
            res.place2(File::E, back, Piece::new(color, PieceKind::King));
            res.place2(File::F, back, Piece::new(color, PieceKind::Bishop));
            res.place2(File::G, back, Piece::new(color, PieceKind::Knight));
            res.place2(File::H, back, Piece::new(color, PieceKind::Rook));
        }
        res
    }

    /// Returns `true` if the raw coordinates `file` and `rank` are inside the board
    #[inline]
    pub const fn in_bounds(file: isize, rank: isize) -> bool {
        Square::in_bounds(file, rank)
    }

    /// Returns the contents of the square `sq`
    #[inline]
    pub fn at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn at2(&self, file: File, rank: Rank) -> Option<Piece> {
        self.at(Square::from_parts(file, rank))
    }

    /// Puts `piece` to the square `sq`, replacing its previous contents
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Puts `piece` to the square with file `file` and rank `rank`
    #[inline]
    pub fn place2(&mut self, file: File, rank: Rank, piece: Piece) {
        self.place(Square::from_parts(file, rank), piece);
    }

    /// Makes the square `sq` empty
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Moves the piece from `src` to `dst` and returns the piece previously standing on `dst`
    ///
    /// Whatever stood on `dst` is destroyed, so this is also how captures are made. No
    /// legality check is done here.
    ///
    /// # Panics
    ///
    /// Panics if `src` is empty.
    pub fn move_piece(&mut self, src: Square, dst: Square) -> Option<Piece> {
        let piece = self.cells[src.index()].take();
        assert!(piece.is_some(), "no piece to move on {}", src);
        std::mem::replace(&mut self.cells[dst.index()], piece)
    }

    /// Returns the contents of all the squares
    ///
    /// The indices in this array are the indices of squares.
    #[inline]
    pub fn cells(&self) -> &[Option<Piece>; 64] {
        &self.cells
    }

    /// Iterates over all the occupied squares
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| self.at(sq).map(|p| (sq, p)))
    }

    /// Returns the squares occupied by the pieces of color `c`
    pub fn color(&self, c: Color) -> Bitboard {
        let mut res = Bitboard::EMPTY;
        for (sq, p) in self.pieces() {
            if p.color == c {
                res |= Bitboard::from_square(sq);
            }
        }
        res
    }

    /// Returns all the occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    /// Returns the total material value of the pieces of color `c`
    ///
    /// See [`rules::material()`] for the values of individual pieces.
    pub fn material(&self, c: Color) -> u32 {
        self.pieces()
            .filter(|(_, p)| p.color == c)
            .map(|(_, p)| rules::material(p.kind))
            .sum()
    }

    /// Parses a board from the compact placement text
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_placement(s: &str) -> Result<Board, GridParseError> {
        Board::from_str(s)
    }

    /// Converts the board into the compact placement text
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_placement(&self) -> String {
        self.to_string()
    }

    /// Parses a board from a plain grid
    ///
    /// The grid consists of eight lines of eight characters each, starting from rank index 0.
    /// Empty squares are denoted by `.`, pieces by their letters (uppercase for White). Leading
    /// and trailing whitespace on each line is ignored, as well as empty lines.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::Board;
    /// #
    /// let grid = Board::initial().as_grid();
    /// assert!(grid.starts_with("rnbqkbnr\npppppppp\n........\n"));
    /// assert_eq!(Board::from_grid(&grid), Ok(Board::initial()));
    /// ```
    pub fn from_grid(s: &str) -> Result<Board, GridParseError> {
        let mut cells = [None; 64];
        let mut rank = 0_usize;
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if rank >= 8 {
                return Err(GridParseError::Overflow);
            }
            let mut file = 0_usize;
            for c in line.chars() {
                if file >= 8 {
                    return Err(GridParseError::RankOverflow(Rank::from_index(rank)));
                }
                cells[rank * 8 + file] = parse_cell(c)?;
                file += 1;
            }
            if file < 8 {
                return Err(GridParseError::RankUnderflow(Rank::from_index(rank)));
            }
            rank += 1;
        }
        if rank < 8 {
            return Err(GridParseError::Underflow);
        }
        Board::from_cells(cells)
    }

    /// Converts the board into a plain grid
    ///
    /// See [`Board::from_grid()`] for the description of the format.
    pub fn as_grid(&self) -> String {
        let mut res = String::with_capacity(72);
        for rank in Rank::iter() {
            for file in File::iter() {
                res.push(self.at2(file, rank).map_or('.', |p| p.as_char()));
            }
            res.push('\n');
        }
        res
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gridchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }

    fn from_cells(cells: [Option<Piece>; 64]) -> Result<Board, GridParseError> {
        for color in [Color::White, Color::Black] {
            let count = cells.iter().flatten().filter(|p| p.color == color).count();
            if count > 16 {
                return Err(GridParseError::TooManyPieces(color));
            }
        }
        Ok(Board { cells })
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

fn parse_cell(c: char) -> Result<Option<Piece>, GridParseError> {
    if c == '.' {
        return Ok(None);
    }
    Piece::from_char(c)
        .map(Some)
        .ok_or(GridParseError::UnexpectedChar(c))
}

fn parse_placement(s: &str) -> Result<[Option<Piece>; 64], GridParseError> {
    type Error = GridParseError;

    let mut file = 0_usize;
    let mut rank = 0_usize;
    let mut cells = [None; 64];
    for c in s.chars() {
        match c {
            '1'..='8' => {
                let add = (c as u8 - b'0') as usize;
                if file + add > 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                file += add;
            }
            '/' => {
                if file < 8 {
                    return Err(Error::RankUnderflow(Rank::from_index(rank)));
                }
                rank += 1;
                file = 0;
                if rank >= 8 {
                    return Err(Error::Overflow);
                }
            }
            _ => {
                if file >= 8 {
                    return Err(Error::RankOverflow(Rank::from_index(rank)));
                }
                cells[rank * 8 + file] =
                    Some(Piece::from_char(c).ok_or(Error::UnexpectedChar(c))?);
                file += 1;
            }
        }
    }

    if file < 8 {
        return Err(Error::RankUnderflow(Rank::from_index(rank)));
    }
    if rank < 7 {
        return Err(Error::Underflow);
    }

    Ok(cells)
}

impl FromStr for Board {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        Board::from_cells(parse_placement(s.trim())?)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let piece = match self.at2(file, rank) {
                    Some(piece) => piece,
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", piece)?;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn piece(p: Piece) -> char;

    fn cell(c: Option<Piece>) -> char {
        c.map_or('.', Self::piece)
    }

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.at2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn piece(p: Piece) -> char {
        p.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn piece(p: Piece) -> char {
        p.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
