//! Dungeon Core - host-independent logic for a dungeons overlay
//!
//! The overlay itself (map scanning, ESP, HUD rendering) lives in the host
//! client and is thin glue over its rendering and event API. This crate holds
//! the pure pieces that glue consults:
//!
//! - **Solver**: a perfect-play tic-tac-toe solver for the in-dungeon puzzle.
//!   Full game-tree minimax, no heuristics, no lookahead horizon.
//! - **Rooms**: a read-only catalog of room definitions, indexed by core id,
//!   room id, and case-insensitive name.
//!
//! # Example
//!
//! ```
//! use dungeon_core::{best_move, Board, Player, Position, Square};
//!
//! # fn example() -> Result<(), dungeon_core::SolverError> {
//! // Mirror the observed puzzle board, then ask for O's optimal reply.
//! let mut board = Board::new();
//! board.set(Position::ALL[4], Square::Occupied(Player::X));
//!
//! let reply = best_move(&board, Player::O)?;
//! assert!(board.is_empty(reply));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod rooms;
mod tictactoe;

// Crate-level exports - Room catalog
pub use rooms::{CatalogError, RoomCatalog, RoomRecord};

// Crate-level exports - Tic-tac-toe types and solver
pub use tictactoe::{
    Board, Game, GameStatus, MoveError, Player, Position, SolverError, Square, best_move, evaluate,
};
