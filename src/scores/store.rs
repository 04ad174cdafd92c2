use std::path::PathBuf;

use crate::error::ScoreStoreError;

/// Default number of scores kept on the leaderboard.
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for the persisted leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub path: PathBuf,
    pub capacity: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig {
            path: PathBuf::from("scores.txt"),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Backing storage for the leaderboard: an ordered list of scores.
pub trait ScoreStore {
    /// Read the stored scores. A store that was never written is empty.
    fn load(&self) -> Result<Vec<u32>, ScoreStoreError>;

    /// Replace the stored scores.
    fn save(&mut self, scores: &[u32]) -> Result<(), ScoreStoreError>;
}

/// Volatile store, handy for tests and for running without a score file.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Vec<u32>, ScoreStoreError> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &[u32]) -> Result<(), ScoreStoreError> {
        self.scores = scores.to_vec();
        Ok(())
    }
}

/// Top-N high scores kept in a [`ScoreStore`], highest first.
///
/// Every `record` is an unlocked read-modify-write against the store.
/// Two processes recording at once can lose an update.
pub struct Leaderboard<S> {
    store: S,
    capacity: usize,
}

impl<S: ScoreStore> Leaderboard<S> {
    pub fn new(store: S, capacity: usize) -> Self {
        Leaderboard { store, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current scores, highest first
    pub fn top(&self) -> Result<Vec<u32>, ScoreStoreError> {
        let mut scores = self.store.load()?;
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(self.capacity);
        Ok(scores)
    }

    /// Add a score and keep only the best `capacity` entries.
    /// Duplicates are kept. Returns the persisted list.
    pub fn record(&mut self, score: u32) -> Result<Vec<u32>, ScoreStoreError> {
        let mut scores = self.store.load()?;
        scores.push(score);
        scores.sort_unstable();
        let kept: Vec<u32> = scores.iter().rev().take(self.capacity).copied().collect();
        self.store.save(&kept)?;

        tracing::info!(score, entries = kept.len(), "score recorded");
        Ok(kept)
    }

    /// Remove every stored score
    pub fn clear(&mut self) -> Result<(), ScoreStoreError> {
        self.store.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Leaderboard<MemoryScoreStore> {
        Leaderboard::new(MemoryScoreStore::new(), DEFAULT_CAPACITY)
    }

    #[test]
    fn test_single_score() {
        let mut lb = board();
        assert_eq!(lb.record(5).unwrap(), vec![5]);
        assert_eq!(lb.store().scores(), &[5]);
    }

    #[test]
    fn test_keeps_top_ten_descending() {
        let mut lb = board();
        for score in [7, 3, 9, 1, 5, 8, 2, 6, 4, 0, 10, 11] {
            lb.record(score).unwrap();
        }
        assert_eq!(lb.store().scores(), &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut lb = board();
        lb.record(4).unwrap();
        lb.record(4).unwrap();
        assert_eq!(lb.top().unwrap(), vec![4, 4]);
    }

    #[test]
    fn test_low_score_dropped_when_full() {
        let mut lb = Leaderboard::new(MemoryScoreStore::new(), 3);
        for score in [5, 6, 7] {
            lb.record(score).unwrap();
        }
        assert_eq!(lb.record(1).unwrap(), vec![7, 6, 5]);
    }

    #[test]
    fn test_top_sorts_unsorted_store() {
        let mut store = MemoryScoreStore::new();
        store.save(&[1, 9, 3]).unwrap();
        let lb = Leaderboard::new(store, 2);
        assert_eq!(lb.top().unwrap(), vec![9, 3]);
    }

    #[test]
    fn test_clear() {
        let mut lb = board();
        lb.record(8).unwrap();
        lb.clear().unwrap();
        assert!(lb.top().unwrap().is_empty());
    }
}
