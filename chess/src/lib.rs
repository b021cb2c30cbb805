//! # Rules engine for a two-player game on a chess board
//!
//! This crate knows how chess pieces move, and nothing more. It computes _pseudo-legal_ moves:
//! the ones that follow the movement patterns of the pieces and the occupancy of the board,
//! without checking whether the king remains under attack. There is no castling, en passant,
//! promotion, check, checkmate or draw detection.
//!
//! The main parts are:
//!
//! - [`Board`], which holds the pieces;
//! - [`movegen::generate()`], which finds the candidates of a single piece;
//! - [`Game`], which keeps the side to move and commits moves;
//! - [`RandomMover`], which plays random moves for the automated side.
//!
//! # Example
//!
//! ```
//! use gridchess::{Game, Square, RandomMover};
//! use std::str::FromStr;
//!
//! let mut game = Game::new_initial();
//! let e2 = Square::from_str("e2").unwrap();
//! let e4 = Square::from_str("e4").unwrap();
//! assert!(game.legal_destinations_for(e2).has(e4));
//! game.apply_move(e2, e4).unwrap();
//!
//! let mut mover = RandomMover::seeded(42);
//! assert!(game.is_automated_turn());
//! let ev = mover.play(&mut game).unwrap();
//! assert_eq!(ev.ply, 2);
//! ```

pub use gridchess_base::{bitboard, geometry, types};

pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod rules;
pub mod selector;

pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{BaseGame, ClickOutcome, Game, GameConfig, TurnChanged, TurnListener, TurnState};
pub use movegen::CandidateList;
pub use moves::{IllegalMove, Move, MoveCandidate, MoveEffect};
pub use selector::RandomMover;
pub use types::{Color, File, Piece, PieceKind, Rank, Square};
