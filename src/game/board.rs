use std::fmt;

/// Cell value marking a card that has been matched and removed.
pub const EMPTY: u32 = 0;

/// A (row, column) coordinate into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a single cell looks like during a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Empty,
    Shown(u32),
    Hidden,
}

/// Rectangular grid of card values. `EMPTY` marks a removed card,
/// any other value names the pair the card belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a board from explicit rows. Panics if the rows are ragged.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "all rows must have the same length"
        );
        Board {
            rows: rows.len(),
            cols,
            cells: rows.concat(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the value at a position, or `None` if it lies outside the grid
    pub fn get(&self, pos: Position) -> Option<u32> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        let idx = pos.row * self.cols + pos.col;
        self.cells[idx] = value;
    }

    /// Remove the card at a position
    pub fn clear(&mut self, pos: Position) {
        if self.contains(pos) {
            self.set(pos, EMPTY);
        }
    }

    /// Number of cards still on the board
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|&&v| v != EMPTY).count()
    }

    /// True once every card has been removed
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&v| v == EMPTY)
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Positions of cards still on the board
    pub fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&pos| self.get(pos).is_some_and(|v| v != EMPTY))
    }

    /// Faces for every cell, showing true values only at `shown`.
    /// Removed cards are always `Face::Empty`.
    pub fn reveal(&self, shown: &[Position]) -> Vec<Vec<Face>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let pos = Position::new(row, col);
                        match self.cells[row * self.cols + col] {
                            EMPTY => Face::Empty,
                            value if shown.contains(&pos) => Face::Shown(value),
                            _ => Face::Hidden,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows(&[vec![1, 2], vec![2, 1]])
    }

    #[test]
    fn test_empty_board_is_cleared() {
        let board = Board::empty(2, 3);
        assert!(board.is_cleared());
        assert_eq!(board.remaining(), 0);
        assert_eq!(board.positions().count(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = sample();
        assert_eq!(board.get(Position::new(1, 0)), Some(2));
        assert_eq!(board.get(Position::new(2, 0)), None);
        assert_eq!(board.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_clear_removes_card() {
        let mut board = sample();
        board.clear(Position::new(0, 0));
        assert_eq!(board.get(Position::new(0, 0)), Some(EMPTY));
        assert_eq!(board.remaining(), 3);
        assert!(!board.is_cleared());
        assert_eq!(board.occupied().count(), 3);
    }

    #[test]
    fn test_reveal_masks_unselected_cards() {
        let mut board = sample();
        board.clear(Position::new(1, 1));

        let faces = board.reveal(&[Position::new(0, 1)]);
        assert_eq!(
            faces,
            vec![
                vec![Face::Hidden, Face::Shown(2)],
                vec![Face::Hidden, Face::Empty],
            ]
        );
    }

    #[test]
    fn test_reveal_never_shows_removed_card() {
        let mut board = sample();
        board.clear(Position::new(0, 0));
        let faces = board.reveal(&[Position::new(0, 0)]);
        assert_eq!(faces[0][0], Face::Empty);
    }

    #[test]
    fn test_reveal_with_nothing_shown() {
        let faces = sample().reveal(&[]);
        assert!(faces.iter().flatten().all(|&f| f == Face::Hidden));
    }
}
