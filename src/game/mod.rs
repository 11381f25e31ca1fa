//! Core Connect Four game logic: board representation, player identity, and
//! the turn-taking session state machine. Independent of any I/O.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::Player;
pub use session::{GameSession, Outcome};
