//! Persistent high-score list: the storage trait, an in-memory store, the
//! flat-file store, and the top-N leaderboard built on top of them.

mod file;
mod store;

pub use file::FileScoreStore;
pub use store::{Leaderboard, MemoryScoreStore, ScoreConfig, ScoreStore, DEFAULT_CAPACITY};
