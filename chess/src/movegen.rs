//! Generation of move candidates
//!
//! Candidates are pseudo-legal: they follow the movement templates from [`rules`](crate::rules)
//! and the occupancy of the board, but nobody checks whether the king remains under attack.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::moves::{Move, MoveCandidate};
use crate::rules::{self, Direction, Movement};
use crate::types::{Color, Piece, Square};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Sink for the generated candidates
pub trait CandidatePush {
    fn push(&mut self, c: MoveCandidate);
}

/// Candidates of a single piece
///
/// No piece has more than 27 candidates (a queen in the center of an empty board), so the list
/// never allocates.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct CandidateList(ArrayVec<MoveCandidate, 32>);

impl Deref for CandidateList {
    type Target = ArrayVec<MoveCandidate, 32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CandidateList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a MoveCandidate;
    type IntoIter = slice::Iter<'a, MoveCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl CandidateList {
    pub fn new() -> CandidateList {
        CandidateList(ArrayVec::new())
    }

    /// Returns the candidate with destination `dst`, if any
    pub fn find(&self, dst: Square) -> Option<MoveCandidate> {
        self.0.iter().find(|c| c.dst == dst).copied()
    }

    pub fn contains(&self, dst: Square) -> bool {
        self.find(dst).is_some()
    }

    /// Returns the set of destination squares
    pub fn destinations(&self) -> Bitboard {
        self.0.iter().map(|c| c.dst).collect()
    }
}

impl CandidatePush for CandidateList {
    fn push(&mut self, c: MoveCandidate) {
        self.0.push(c);
    }
}

impl CandidatePush for Vec<MoveCandidate> {
    fn push(&mut self, c: MoveCandidate) {
        Vec::push(self, c);
    }
}

struct MoveGenImpl<'a, P> {
    board: &'a Board,
    piece: Piece,
    src: Square,
    dst: &'a mut P,
}

impl<'a, P: CandidatePush> MoveGenImpl<'a, P> {
    fn new(board: &'a Board, piece: Piece, src: Square, dst: &'a mut P) -> Self {
        MoveGenImpl {
            board,
            piece,
            src,
            dst,
        }
    }

    fn is_enemy(&self, other: Piece) -> bool {
        other.color != self.piece.color
    }

    fn walk(&mut self, (df, dr): Direction, limit: usize, can_capture: bool) {
        let mut cur = self.src;
        for _ in 0..limit {
            cur = match cur.try_shift(df, dr) {
                Some(sq) => sq,
                None => return,
            };
            match self.board.at(cur) {
                None => self.dst.push(MoveCandidate::quiet(cur)),
                Some(other) => {
                    if can_capture && self.is_enemy(other) {
                        self.dst.push(MoveCandidate::capture(cur));
                    }
                    return;
                }
            }
        }
    }

    fn try_capture(&mut self, (df, dr): Direction) {
        let Some(sq) = self.src.try_shift(df, dr) else {
            return;
        };
        if let Some(other) = self.board.at(sq) {
            if self.is_enemy(other) {
                self.dst.push(MoveCandidate::capture(sq));
            }
        }
    }

    fn gen(&mut self) {
        match rules::movement(self.piece.kind, self.piece.color, self.src) {
            Movement::Walk { directions, limit } => {
                for &dir in directions {
                    self.walk(dir, limit, true);
                }
            }
            Movement::Pawn {
                forward,
                limit,
                captures,
            } => {
                self.walk(forward, limit, false);
                for dir in captures {
                    self.try_capture(dir);
                }
            }
        }
    }
}

/// Pushes the candidates of the piece standing on `src` into `dst`
///
/// Nothing is pushed if `src` is empty. Candidates are pushed in the order of the directions
/// in the piece's movement template, and by increasing distance along each direction.
pub fn generate_into<P: CandidatePush>(b: &Board, src: Square, dst: &mut P) {
    if let Some(piece) = b.at(src) {
        MoveGenImpl::new(b, piece, src, dst).gen();
    }
}

/// Returns the candidates of the piece standing on `src`
///
/// Returns an empty list if `src` is empty.
pub fn generate(b: &Board, src: Square) -> CandidateList {
    let mut res = CandidateList::new();
    generate_into(b, src, &mut res);
    res
}

/// Returns the candidates of all the pieces of color `c` as moves
pub fn gen_all(b: &Board, c: Color) -> Vec<Move> {
    let mut res = Vec::new();
    for src in b.color(c) {
        res.extend(generate(b, src).iter().map(|cand| Move::new(src, cand.dst)));
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveEffect;
    use crate::types::{File, PieceKind, Rank};
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    fn dsts(b: &Board, src: &str) -> Vec<String> {
        generate(b, sq(src))
            .iter()
            .map(|c| c.dst.to_string())
            .collect()
    }

    #[test]
    fn test_empty_square() {
        let b = Board::initial();
        for src in Square::iter().filter(|&s| b.at(s).is_none()) {
            assert!(generate(&b, src).is_empty());
        }
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        for file in File::iter() {
            let cands = generate(&b, Square::from_parts(file, Rank::R2));
            assert_eq!(cands.len(), 2);
            assert!(cands.iter().all(|c| c.effect == MoveEffect::Quiet));
            assert_eq!(
                cands.destinations(),
                Bitboard::EMPTY
                    .with(Square::from_parts(file, Rank::R3))
                    .with(Square::from_parts(file, Rank::R4))
            );
        }
        assert_eq!(dsts(&b, "e2"), vec!["e3", "e4"]);
        assert_eq!(dsts(&b, "d7"), vec!["d6", "d5"]);

        assert!(generate(&b, Square::try_new(0, 7).unwrap()).is_empty());
        let knight = generate(&b, Square::try_new(1, 7).unwrap());
        assert_eq!(knight.len(), 2);
        assert_eq!(dsts(&b, "b1"), vec!["c3", "a3"]);
        assert_eq!(dsts(&b, "g8"), vec!["h6", "f6"]);

        for src in ["a1", "c1", "d1", "e1", "a8", "d8", "e8"] {
            assert!(generate(&b, sq(src)).is_empty(), "{} must be blocked", src);
        }

        assert_eq!(gen_all(&b, Color::White).len(), 20);
        assert_eq!(gen_all(&b, Color::Black).len(), 20);
    }

    #[test]
    fn test_sliding_blocked() {
        // Rook on d4: friendly pawn on d6, enemy knight on f4, enemy pawn on d2.
        let b = Board::from_placement("8/8/3P4/8/3R1n2/8/3p4/8").unwrap();
        let cands = generate(&b, sq("d4"));
        assert_eq!(
            cands.iter().copied().collect::<Vec<_>>(),
            vec![
                MoveCandidate::quiet(sq("e4")),
                MoveCandidate::capture(sq("f4")),
                MoveCandidate::quiet(sq("d3")),
                MoveCandidate::capture(sq("d2")),
                MoveCandidate::quiet(sq("c4")),
                MoveCandidate::quiet(sq("b4")),
                MoveCandidate::quiet(sq("a4")),
                MoveCandidate::quiet(sq("d5")),
            ]
        );
    }

    #[test]
    fn test_first_blocker_ends_walk() {
        let b = Board::from_placement("r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R")
            .unwrap();
        for (src, piece) in b.pieces() {
            if !piece.kind.is_sliding() {
                continue;
            }
            let cands = generate(&b, src);
            for cand in &cands {
                let df = cand.dst.file().index() as isize - src.file().index() as isize;
                let dr = cand.dst.rank().index() as isize - src.rank().index() as isize;
                let mut cur = src;
                loop {
                    cur = cur.try_shift(df.signum(), dr.signum()).unwrap();
                    if cur == cand.dst {
                        break;
                    }
                    assert_eq!(b.at(cur), None, "{} jumps over {}", src, cur);
                }
                let target = b.at(cand.dst);
                match cand.effect {
                    MoveEffect::Quiet => assert_eq!(target, None),
                    MoveEffect::Capture => {
                        assert_eq!(target.map(|p| p.color), Some(piece.color.inv()))
                    }
                }
            }
            let captures = cands.iter().filter(|c| c.is_capture()).count();
            assert!(captures <= 8);
        }
    }

    #[test]
    fn test_queen_center() {
        let b = Board::from_placement("8/8/8/3Q4/8/8/8/8").unwrap();
        let cands = generate(&b, sq("d5"));
        assert_eq!(cands.len(), 27);
        assert!(cands.iter().all(|c| !c.is_capture()));
    }

    #[test]
    fn test_king_and_knight() {
        let b = Board::from_placement("8/8/8/8/8/8/1p6/K7").unwrap();
        assert_eq!(dsts(&b, "a1"), vec!["b2", "b1", "a2"]);
        assert_eq!(
            generate(&b, sq("a1")).find(sq("b2")),
            Some(MoveCandidate::capture(sq("b2")))
        );

        let b = Board::from_placement("8/8/8/8/3N4/8/2P5/8").unwrap();
        assert_eq!(
            dsts(&b, "d4"),
            vec!["e2", "e6", "c6", "f3", "f5", "b3", "b5"]
        );
    }

    #[test]
    fn test_pawn() {
        // Forward square occupied by an enemy: no forward move, no capture there.
        let b = Board::from_placement("8/8/8/8/4p3/4P3/8/8").unwrap();
        assert!(generate(&b, sq("e3")).is_empty());
        assert!(generate(&b, sq("e4")).is_empty());

        // Double step is blocked by a piece on the first square.
        let b = Board::from_placement("8/8/8/8/8/4n3/4P3/8").unwrap();
        assert!(generate(&b, sq("e2")).is_empty());

        // Double step stops at a piece on the second square.
        let b = Board::from_placement("8/8/8/8/4n3/8/4P3/8").unwrap();
        assert_eq!(dsts(&b, "e2"), vec!["e3"]);

        // Diagonal captures only on enemies.
        let b = Board::from_placement("8/8/8/3p1P2/4P3/8/8/8").unwrap();
        let cands = generate(&b, sq("e4"));
        assert_eq!(
            cands.iter().copied().collect::<Vec<_>>(),
            vec![
                MoveCandidate::quiet(sq("e5")),
                MoveCandidate::capture(sq("d5")),
            ]
        );

        // Black pawns move toward increasing rank index.
        let b = Board::from_placement("8/3p4/2P1P3/8/8/8/8/8").unwrap();
        let cands = generate(&b, sq("d7"));
        assert_eq!(
            cands.iter().copied().collect::<Vec<_>>(),
            vec![
                MoveCandidate::quiet(sq("d6")),
                MoveCandidate::quiet(sq("d5")),
                MoveCandidate::capture(sq("e6")),
                MoveCandidate::capture(sq("c6")),
            ]
        );

        // Pawns on the edge files test only one diagonal.
        let b = Board::from_placement("8/8/8/1p6/P7/8/8/8").unwrap();
        assert_eq!(dsts(&b, "a4"), vec!["a5", "b5"]);

        // A pawn on the last rank has nowhere to go.
        let b = Board::from_placement("P7/8/8/8/8/8/8/8").unwrap();
        assert!(generate(&b, sq("a8")).is_empty());
    }

    #[test]
    fn test_generate_into_vec() {
        let b = Board::initial();
        let mut v = Vec::new();
        generate_into(&b, sq("g1"), &mut v);
        generate_into(&b, sq("e4"), &mut v);
        assert_eq!(
            v,
            vec![
                MoveCandidate::quiet(sq("h3")),
                MoveCandidate::quiet(sq("f3")),
            ]
        );
    }

    #[test]
    fn test_does_not_mutate() {
        let b = Board::initial();
        let copy = b;
        for src in Square::iter() {
            let _ = generate(&b, src);
        }
        assert_eq!(b, copy);
        assert_eq!(
            b.at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }
}
