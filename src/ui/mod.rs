//! Console front end: pick parsing, board rendering, and the interactive
//! session loop.

mod app;
pub mod board_view;
pub mod input;

pub use app::{App, ConsoleConfig, RoundReport, SessionPhase};
