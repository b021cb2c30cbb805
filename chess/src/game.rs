//! Turn bookkeeping on top of [`Board`]

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::movegen::{self, CandidateList};
use crate::moves::{IllegalMove, Move, MoveCandidate};
use crate::types::{Color, Piece, Square};

use tracing::{debug, trace};

/// Side to move and the number of moves made so far
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TurnState {
    pub to_move: Color,
    pub ply_count: u32,
}

impl TurnState {
    pub const fn new(to_move: Color) -> TurnState {
        TurnState {
            to_move,
            ply_count: 0,
        }
    }

    fn advance(&mut self) {
        self.ply_count = self.ply_count.wrapping_add(1);
        self.to_move = self.to_move.inv();
    }
}

impl Default for TurnState {
    fn default() -> TurnState {
        TurnState::new(Color::White)
    }
}

/// Notification sent after every committed move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TurnChanged {
    /// Move that was made
    pub mv: Move,
    /// Whether the move was a capture
    pub candidate: MoveCandidate,
    /// Side to move after the move
    pub side: Color,
    /// Number of moves made so far, including this one
    pub ply: u32,
}

/// Receiver of [`TurnChanged`] notifications
pub trait TurnListener {
    fn turn_changed(&mut self, ev: &TurnChanged);
}

/// Listener that ignores all the notifications
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct NoListener;

impl TurnListener for NoListener {
    fn turn_changed(&mut self, _ev: &TurnChanged) {}
}

impl TurnListener for Vec<TurnChanged> {
    fn turn_changed(&mut self, ev: &TurnChanged) {
        self.push(*ev);
    }
}

/// Which sides are played automatically
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Side driven by a move selector instead of a human, if any
    pub automated: Option<Color>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            automated: Some(Color::Black),
        }
    }
}

/// Result of [`BaseGame::click()`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The square was selected, these are the candidates of the piece on it. The list is empty
    /// if the square is empty.
    Selected(CandidateList),
    /// The click completed a move
    Moved(TurnChanged),
    /// The click completed a move that cannot be made; the selection is cleared
    Rejected(IllegalMove),
}

pub type Game = BaseGame<NoListener>;

/// Game in progress: a board, the side to move and the pending selection
///
/// The board is changed only by committing moves, and every committed move flips the side to
/// move. Nothing ever ends the game.
///
/// Selecting a square doesn't depend on the side to move, so one can look at the opponent's
/// candidates too. The side is checked only when the move is committed.
#[derive(Debug, Clone)]
pub struct BaseGame<L: TurnListener> {
    board: Board,
    state: TurnState,
    config: GameConfig,
    pending: Option<Square>,
    listener: L,
}

impl<L: TurnListener> BaseGame<L> {
    pub fn new(board: Board, to_move: Color, config: GameConfig, listener: L) -> Self {
        BaseGame {
            board,
            state: TurnState::new(to_move),
            config,
            pending: None,
            listener,
        }
    }

    pub fn new_initial() -> Self
    where
        L: Default,
    {
        Self::with_listener(L::default())
    }

    pub fn with_listener(listener: L) -> Self {
        Self::new(
            Board::initial(),
            Color::White,
            GameConfig::default(),
            listener,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the contents of all the squares, for drawing
    pub fn board_contents(&self) -> &[Option<Piece>; 64] {
        self.board.cells()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn side(&self) -> Color {
        self.state.to_move
    }

    pub fn ply(&self) -> u32 {
        self.state.ply_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns `true` if the side to move is played by a move selector
    pub fn is_automated_turn(&self) -> bool {
        self.config.automated == Some(self.state.to_move)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Returns the square selected by the previous [`BaseGame::click()`], if any
    pub fn pending(&self) -> Option<Square> {
        self.pending
    }

    /// Returns the candidates of the piece on `sq`
    ///
    /// Returns an empty list if `sq` is empty. The piece may belong to any side.
    pub fn select(&self, sq: Square) -> CandidateList {
        let res = movegen::generate(&self.board, sq);
        trace!(square = %sq, candidates = res.len(), "select");
        res
    }

    /// Returns the squares the piece on `sq` may move to, for highlighting
    pub fn legal_destinations_for(&self, sq: Square) -> Bitboard {
        self.select(sq).destinations()
    }

    /// Moves the piece from `src` to `dst`
    ///
    /// Succeeds only if there is a piece of the side to move on `src` and `dst` is one of its
    /// candidates. On failure, nothing changes.
    pub fn apply_move(&mut self, src: Square, dst: Square) -> Result<TurnChanged, IllegalMove> {
        self.commit(Move::new(src, dst))
    }

    /// Same as [`BaseGame::apply_move()`], taking a [`Move`]
    pub fn commit(&mut self, mv: Move) -> Result<TurnChanged, IllegalMove> {
        let candidate = mv.validate(&self.board, self.state.to_move)?;
        self.board.move_piece(mv.src, mv.dst);
        self.state.advance();
        let ev = TurnChanged {
            mv,
            candidate,
            side: self.state.to_move,
            ply: self.state.ply_count,
        };
        debug!(
            mv = %mv,
            effect = ?candidate.effect,
            side = ?ev.side,
            ply = ev.ply,
            "turn changed"
        );
        self.listener.turn_changed(&ev);
        Ok(ev)
    }

    /// Handles a click on `sq`
    ///
    /// The first click selects `sq` and returns its candidates. The next click tries to move the
    /// selected piece to the clicked square. The selection is cleared after the second click
    /// whatever its result is.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.pending.take() {
            None => {
                self.pending = Some(sq);
                ClickOutcome::Selected(self.select(sq))
            }
            Some(src) => match self.apply_move(src, sq) {
                Ok(ev) => ClickOutcome::Moved(ev),
                Err(e) => {
                    debug!(src = %src, dst = %sq, error = %e, "move rejected");
                    ClickOutcome::Rejected(e)
                }
            },
        }
    }

    /// Drops the pending selection
    pub fn clear_selection(&mut self) {
        self.pending = None;
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new_initial()
    }
}
