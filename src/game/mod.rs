//! Core memory game logic: the card grid, deck dealing, players, and the
//! turn state machine.

mod board;
pub mod deck;
mod player;
mod state;

pub use board::{Board, Face, Position, EMPTY};
pub use deck::{deal, DeckConfig};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Phase, Rules, Scoreboard, TurnOutcome};
