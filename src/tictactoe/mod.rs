//! Tic-tac-toe puzzle logic: board model, rules, and perfect-play solver.

mod rules;
mod solver;
mod types;

pub use rules::{Game, MoveError};
pub use solver::{SolverError, best_move, evaluate};
pub use types::{Board, GameStatus, Player, Position, Square};
