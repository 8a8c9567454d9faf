//! Terminal-state detection and the mutable game engine.

use super::types::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, instrument};

/// Winning lines by row-major index: the three rows, then the three columns,
/// then the two diagonals. The scan order is fixed for determinism; at most
/// one line can be complete in a legal position.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

impl Board {
    /// Checks for a completed line, returning the winning player if any.
    pub fn winner(&self) -> Option<Player> {
        let squares = self.squares();
        for [a, b, c] in LINES {
            if let Square::Occupied(player) = squares[a]
                && squares[a] == squares[b]
                && squares[b] == squares[c]
            {
                return Some(player);
            }
        }
        None
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares().iter().all(|&s| s != Square::Empty)
    }
}

/// Errors that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Mutable tic-tac-toe game engine.
///
/// The overlay mirrors an observed puzzle board into one of these, advancing
/// it as marks appear on screen.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already concluded, or
    /// [`MoveError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.to_move = player.opponent();
        self.update_status();

        debug!(position = %pos, status = ?self.status, "Move applied");
        Ok(())
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
