use crossterm::style::Stylize;

use crate::game::{Board, Face, Position};

/// Render the board with only `shown` face up, one text row per grid row,
/// bracketed by blank lines. `-` is a removed card, `*` a hidden one.
pub fn render(board: &Board, shown: &[Position], color: bool) -> String {
    let mut out = String::from("\n");
    for row in board.reveal(shown) {
        for face in row {
            out.push_str(&render_face(face, color));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

fn render_face(face: Face, color: bool) -> String {
    match (face, color) {
        (Face::Empty, false) => "-".to_string(),
        (Face::Hidden, false) => "*".to_string(),
        (Face::Shown(value), false) => value.to_string(),
        (Face::Empty, true) => "-".dark_grey().to_string(),
        (Face::Hidden, true) => "*".blue().to_string(),
        (Face::Shown(value), true) => value.to_string().yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let mut board = Board::from_rows(&[vec![1, 2], vec![2, 1]]);
        board.clear(Position::new(1, 1));
        board
    }

    #[test]
    fn test_render_hidden() {
        assert_eq!(render(&board(), &[], false), "\n**\n*-\n\n");
    }

    #[test]
    fn test_render_two_shown() {
        let shown = [Position::new(0, 0), Position::new(1, 0)];
        assert_eq!(render(&board(), &shown, false), "\n1*\n2-\n\n");
    }

    #[test]
    fn test_multi_digit_values() {
        let board = Board::from_rows(&[vec![12, 3]]);
        assert_eq!(render(&board, &[Position::new(0, 0)], false), "\n12*\n\n");
    }

    #[test]
    fn test_color_keeps_symbols() {
        let out = render(&board(), &[Position::new(0, 1)], true);
        assert!(out.contains('*'));
        assert!(out.contains('-'));
        assert!(out.contains('2'));
        assert!(out.starts_with('\n') && out.ends_with("\n\n"));
    }
}
