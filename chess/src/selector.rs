//! Random move selection for the automated side

use crate::game::{BaseGame, TurnChanged, TurnListener};
use crate::movegen::CandidateList;
use crate::moves::Move;
use crate::types::Square;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Returns all the pieces of the side to move that have at least one candidate
pub fn movable_pieces<L: TurnListener>(game: &BaseGame<L>) -> Vec<(Square, CandidateList)> {
    game.board()
        .color(game.side())
        .into_iter()
        .map(|sq| (sq, game.select(sq)))
        .filter(|(_, cands)| !cands.is_empty())
        .collect()
}

/// Plays uniformly random moves
///
/// First a piece is chosen uniformly among the pieces that can move, then a destination is
/// chosen uniformly among the candidates of this piece. So, pieces with fewer candidates make
/// their moves more often than a uniform choice over all moves would give.
#[derive(Debug, Clone)]
pub struct RandomMover<R> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> Self {
        RandomMover { rng }
    }

    /// Chooses a move for the side to move
    ///
    /// Returns `None` if no piece of the side to move can go anywhere.
    pub fn choose<L: TurnListener>(&mut self, game: &BaseGame<L>) -> Option<Move> {
        let pieces = movable_pieces(game);
        let (src, cands) = pieces.choose(&mut self.rng)?;
        let cand = cands.choose(&mut self.rng)?;
        Some(Move::new(*src, cand.dst))
    }

    /// Chooses a move for the side to move and makes it
    ///
    /// If no piece can move, nothing happens and `None` is returned. This is not an error: the
    /// turn just stays with the same side.
    pub fn play<L: TurnListener>(&mut self, game: &mut BaseGame<L>) -> Option<TurnChanged> {
        let Some(mv) = self.choose(game) else {
            debug!(side = ?game.side(), ply = game.ply(), "no legal moves");
            return None;
        };
        match game.commit(mv) {
            Ok(ev) => Some(ev),
            Err(e) => {
                warn!(mv = %mv, error = %e, "chosen move was rejected");
                None
            }
        }
    }
}

impl RandomMover<StdRng> {
    /// Creates a mover with a reproducible sequence of moves
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a mover seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
