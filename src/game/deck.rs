use rand::Rng;

use super::board::{Board, Position};
use crate::error::DeckError;

/// Grid dimensions for newly dealt decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig { rows: 4, cols: 4 }
    }
}

impl DeckConfig {
    /// Number of pairs a deck of this size holds
    pub fn pairs(&self) -> Result<usize, DeckError> {
        let (rows, cols) = (self.rows, self.cols);
        let cells = rows
            .checked_mul(cols)
            .ok_or(DeckError::TooLarge { rows, cols })?;
        if cells == 0 {
            return Err(DeckError::EmptyGrid { rows, cols });
        }
        if cells % 2 != 0 {
            return Err(DeckError::OddCellCount { rows, cols });
        }
        if u32::try_from(cells / 2).is_err() {
            return Err(DeckError::TooLarge { rows, cols });
        }
        Ok(cells / 2)
    }
}

/// Deal a shuffled `rows` x `cols` grid in which every pair value
/// `1..=rows*cols/2` appears exactly twice.
///
/// Each pair draws two positions uniformly at random, without replacement,
/// from the set of cells not yet dealt.
pub fn deal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Board, DeckError> {
    let pairs = DeckConfig { rows, cols }.pairs()?;

    let mut board = Board::empty(rows, cols);
    let mut candidates: Vec<Position> = board.positions().collect();

    for value in 1..=pairs as u32 {
        for _ in 0..2 {
            let idx = rng.random_range(0..candidates.len());
            let pos = candidates.swap_remove(idx);
            board.set(pos, value);
        }
    }
    debug_assert!(candidates.is_empty());

    tracing::debug!(rows, cols, pairs, "dealt new deck");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn value_counts(board: &Board) -> Vec<usize> {
        let pairs = board.rows() * board.cols() / 2;
        let mut counts = vec![0; pairs + 1];
        for pos in board.positions() {
            let v = board.get(pos).unwrap() as usize;
            assert!(v <= pairs, "value {v} out of range");
            counts[v] += 1;
        }
        counts
    }

    #[test]
    fn test_default_deck_is_4x4() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = DeckConfig::default();
        let board = deal(config.rows, config.cols, &mut rng).unwrap();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.remaining(), 16);
    }

    #[test]
    fn test_every_value_appears_twice() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = deal(4, 4, &mut rng).unwrap();
        let counts = value_counts(&board);
        assert_eq!(counts[0], 0);
        assert!(counts[1..].iter().all(|&c| c == 2));
    }

    #[test]
    fn test_odd_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            deal(3, 3, &mut rng),
            Err(DeckError::OddCellCount { rows: 3, cols: 3 })
        );
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            deal(0, 4, &mut rng),
            Err(DeckError::EmptyGrid { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_overflowing_grid_is_rejected() {
        let config = DeckConfig {
            rows: usize::MAX,
            cols: 2,
        };
        assert!(matches!(config.pairs(), Err(DeckError::TooLarge { .. })));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = deal(4, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = deal(4, 4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placement_varies() {
        // 2x2 has only three distinct layouts; over 64 deals every one should show up.
        let mut rng = StdRng::seed_from_u64(3);
        let mut layouts = std::collections::HashSet::new();
        for _ in 0..64 {
            let board = deal(2, 2, &mut rng).unwrap();
            let first = board.get(Position::new(0, 0)).unwrap();
            let partner = board
                .positions()
                .skip(1)
                .find(|&p| board.get(p) == Some(first))
                .unwrap();
            layouts.insert(partner);
        }
        assert_eq!(layouts.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_even_grids_hold_each_pair_twice(
            rows in 1usize..8,
            cols in 1usize..8,
            seed in any::<u64>(),
        ) {
            prop_assume!(rows * cols % 2 == 0);
            let board = deal(rows, cols, &mut StdRng::seed_from_u64(seed)).unwrap();
            let counts = value_counts(&board);
            prop_assert_eq!(counts[0], 0);
            prop_assert!(counts[1..].iter().all(|&c| c == 2));
        }

        #[test]
        fn prop_odd_grids_fail(rows in 0usize..8, cols in 0usize..8) {
            let rows = rows * 2 + 1;
            let cols = cols * 2 + 1;
            let result = deal(rows, cols, &mut StdRng::seed_from_u64(0));
            prop_assert_eq!(result, Err(DeckError::OddCellCount { rows, cols }));
        }
    }
}
