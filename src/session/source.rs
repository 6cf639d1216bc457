//! Initial sequences: random generation and comma-separated custom input

use rand::Rng;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const SIZE_MIN: usize = 5;
pub const SIZE_MAX: usize = 150;
pub const DEFAULT_SIZE: usize = 50;

/// Range random values are drawn from
pub const VALUE_RANGE: RangeInclusive<i64> = 10..=400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("please enter numbers separated by commas")]
    Empty,

    #[error("invalid number '{token}' at position {position} (example: 10, 3, 25, 7, 18)")]
    InvalidToken { position: usize, token: String },
}

/// `size` values drawn uniformly from [`VALUE_RANGE`]
pub fn random_sequence<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}

/// Parse `"10, 3, 25"` into a sequence. Either every token parses or the
/// whole input is rejected.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    text.split(',')
        .enumerate()
        .map(|(idx, token)| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                position: idx + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_with_whitespace() {
        assert_eq!(parse_sequence(" 10, 3,25 ,-7 "), Ok(vec![10, 3, 25, -7]));
        assert_eq!(parse_sequence("42"), Ok(vec![42]));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_sequence(""), Err(ParseError::Empty));
        assert_eq!(parse_sequence("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_bad_tokens_entirely() {
        assert_eq!(
            parse_sequence("1, two, 3"),
            Err(ParseError::InvalidToken {
                position: 2,
                token: "two".to_string()
            })
        );
        assert!(matches!(
            parse_sequence("1,,2"),
            Err(ParseError::InvalidToken { position: 2, .. })
        ));
        assert!(parse_sequence("1.5").is_err());
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_sequence(SIZE_MAX, &mut rng);
        assert_eq!(values.len(), SIZE_MAX);
        assert!(values.iter().all(|v| VALUE_RANGE.contains(v)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_sequence(20, &mut StdRng::seed_from_u64(99));
        let b = random_sequence(20, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
