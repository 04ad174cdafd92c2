//! # Memory Match
//!
//! A two-player console memory game. Cards are dealt face down in pairs;
//! players take turns flipping two cards, scoring a point and removing the
//! pair when they match. Final scores go to a persistent top-10 list.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, deck dealing, players, turn state machine
//! - [`scores`] — Score store trait, flat-file store, and leaderboard
//! - [`ui`] — Console session: input parsing, board rendering, replay loop
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod scores;
pub mod ui;
