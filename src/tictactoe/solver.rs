//! Perfect-play move search for the tic-tac-toe puzzle.
//!
//! Full game-tree minimax with depth-weighted terminal scores: a win for the
//! solved side is worth `10 - depth` and a loss `depth - 10`, so faster wins
//! and slower losses rank strictly higher without a separate tie-break pass.
//! The 3x3 board bounds recursion at nine plies, so the whole tree is
//! explored synchronously in one call.

use super::types::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Errors that can occur when solving a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SolverError {
    /// The board has no empty square, so no move exists.
    #[display("Board is full; no move to make")]
    BoardFull,
}

impl std::error::Error for SolverError {}

/// Computes the optimal move for `side` on the given board.
///
/// Candidates are scanned in row-major order and the first move whose
/// full-depth score strictly beats the best seen so far is kept, so among
/// equally optimal moves the earliest in scan order is always returned. The
/// caller's board is never modified; the search runs on a private copy.
///
/// The board must be a legal, reachable position (mark counts differing by
/// at most one). That is a documented precondition, not validated here; on
/// an illegal board the result is unspecified. A board that already contains
/// a completed line is still searched and yields an arbitrary empty square
/// with the degenerate score.
///
/// # Errors
///
/// Returns [`SolverError::BoardFull`] if no empty square exists. This is the
/// only failure mode; it is checked once before any recursion.
#[instrument(skip(board), fields(side = %side))]
pub fn best_move(board: &Board, side: Player) -> Result<Position, SolverError> {
    if board.is_full() {
        return Err(SolverError::BoardFull);
    }

    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(side));
        let score = minimax(&mut scratch, side, 1, false);
        scratch.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    // The full-board check above guarantees at least one candidate.
    match best {
        Some((pos, score)) => {
            debug!(position = %pos, score, "Solved position");
            Ok(pos)
        }
        None => Err(SolverError::BoardFull),
    }
}

/// Returns the full-depth minimax value of the position with `side` to move.
///
/// Positive means `side` forces a win, negative a forced loss, zero a draw
/// under perfect play from both sides. Terminal boards evaluate directly
/// (win `10`, loss `-10`, draw `0`).
#[instrument(skip(board), fields(side = %side))]
pub fn evaluate(board: &Board, side: Player) -> i32 {
    let mut scratch = board.clone();
    minimax(&mut scratch, side, 0, true)
}

/// Recursive minimax over the remaining game tree.
///
/// Every step places exactly one mark, recurses, and restores the square to
/// `Empty` before returning, so no mutation escapes a completed call and
/// sibling branches never observe each other's state.
fn minimax(board: &mut Board, side: Player, depth: i32, maximizing: bool) -> i32 {
    // Terminal checks, in fixed order: win, loss, full board.
    if let Some(winner) = board.winner() {
        return if winner == side { 10 - depth } else { depth - 10 };
    }
    if board.is_full() {
        return 0;
    }

    let player = if maximizing { side } else { side.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(player));
        let score = minimax(board, side, depth + 1, !maximizing);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
