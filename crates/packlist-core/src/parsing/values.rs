/// Parse the quantity cell of an order row.
///
/// Takes the first run of ASCII digits anywhere in the text, so layout
/// artifacts and units are tolerated:
/// - "3" -> 3
/// - "  3\n" -> 3
/// - "3개" -> 3
/// - "qty: 12 pcs" -> 12
/// - "abc" -> 0
///
/// A run too large for `u32` also yields 0.
pub fn parse_quantity(s: &str) -> u32 {
    let digits: &str = match s.find(|c: char| c.is_ascii_digit()) {
        Some(start) => {
            let rest = &s[start..];
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[..end]
        }
        None => return 0,
    };
    digits.parse().unwrap_or(0)
}

/// Trim a cell value the way every field is compared.
pub fn norm(s: &str) -> &str {
    s.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_quantity("3"), 3);
    }

    #[test]
    fn test_surrounding_whitespace_and_newline() {
        assert_eq!(parse_quantity("  3\n"), 3);
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(parse_quantity("3개"), 3);
    }

    #[test]
    fn test_embedded_in_text() {
        assert_eq!(parse_quantity("qty: 12 pcs"), 12);
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(parse_quantity("2 x 6"), 2);
    }

    #[test]
    fn test_no_digits_is_zero() {
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
    }

    #[test]
    fn test_explicit_zero() {
        assert_eq!(parse_quantity("0"), 0);
    }

    #[test]
    fn test_overflow_is_zero() {
        assert_eq!(parse_quantity("99999999999999999999"), 0);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_quantity("007"), 7);
    }

    #[test]
    fn test_norm_trims() {
        assert_eq!(norm("  사과 \n"), "사과");
    }
}
