use crate::error::InputError;
use crate::game::Position;

/// Read a pick from free-form text.
///
/// Everything except ASCII digits and spaces is dropped, the rest is split
/// on whitespace, and the first two numbers are taken as row and column.
/// So `"(1, 2)"` reads as row 1, column 2, while `"1,2"` collapses to `12`.
pub fn parse_pick(line: &str) -> Result<Position, InputError> {
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ' ')
        .collect();

    let numbers: Vec<&str> = cleaned.split_whitespace().collect();
    if numbers.len() < 2 {
        return Err(InputError::MissingCoordinates {
            found: numbers.len(),
        });
    }

    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::NumberOutOfRange(s.to_string()))
    };
    Ok(Position::new(parse(numbers[0])?, parse(numbers[1])?))
}

/// Any answer containing an `n`, in either case, declines another round.
pub fn declines_replay(answer: &str) -> bool {
    answer.to_lowercase().contains('n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pair() {
        assert_eq!(parse_pick("1 2"), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(parse_pick("(3, 0)"), Ok(Position::new(3, 0)));
        assert_eq!(parse_pick("row 2 col 1\n"), Ok(Position::new(2, 1)));
    }

    #[test]
    fn test_extra_numbers_ignored() {
        assert_eq!(parse_pick("0 1 2"), Ok(Position::new(0, 1)));
    }

    #[test]
    fn test_comma_without_space_merges_digits() {
        assert_eq!(
            parse_pick("1,2"),
            Err(InputError::MissingCoordinates { found: 1 })
        );
    }

    #[test]
    fn test_minus_sign_is_stripped() {
        assert_eq!(parse_pick("-1 2"), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(
            parse_pick(""),
            Err(InputError::MissingCoordinates { found: 0 })
        );
    }

    #[test]
    fn test_huge_number() {
        let big = "99999999999999999999999999";
        assert_eq!(
            parse_pick(&format!("{big} 1")),
            Err(InputError::NumberOutOfRange(big.to_string()))
        );
    }

    #[test]
    fn test_replay_answers() {
        assert!(declines_replay("n"));
        assert!(declines_replay("No"));
        assert!(declines_replay("NOPE"));
        assert!(declines_replay("i'm done, thanks")); // contains an n
        assert!(!declines_replay("y"));
        assert!(!declines_replay("yes"));
        assert!(!declines_replay(""));
    }
}
