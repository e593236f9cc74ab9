//! Word splitting for over-wide words
//!
//! When a single word is too wide for a whole line it has to be broken
//! somewhere. CamelCase boundaries read far better than arbitrary cuts,
//! so the split point is the uppercase letter nearest the midpoint.

/// Split a word into two fragments at the uppercase letter nearest the
/// character midpoint, preferring positions at or below it.
///
/// Offsets 0, 1, 2, ... from the midpoint are probed below first, then
/// above; the split lands before the first uppercase character found.
/// A word with no interior uppercase splits at the exact midpoint
/// (floor). `"HelloWorld"` becomes `("Hello", "World")`.
pub fn split_word(word: &str) -> (String, String) {
    let chars: Vec<char> = word.chars().collect();
    let total = chars.len();
    let mid = total / 2;

    for offset in 0..=mid {
        let below = mid - offset;
        if chars.get(below).is_some_and(|c| c.is_uppercase()) {
            return split_at(&chars, below);
        }
        let above = mid + offset;
        if above < total && chars[above].is_uppercase() {
            return split_at(&chars, above);
        }
    }

    split_at(&chars, mid)
}

fn split_at(chars: &[char], index: usize) -> (String, String) {
    (
        chars[..index].iter().collect(),
        chars[index..].iter().collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_boundary() {
        assert_eq!(
            split_word("HelloWorld"),
            ("Hello".to_string(), "World".to_string())
        );
    }

    #[test]
    fn test_no_uppercase_splits_at_midpoint() {
        assert_eq!(
            split_word("abcdefgh"),
            ("abcd".to_string(), "efgh".to_string())
        );
        // Odd length: floor midpoint
        assert_eq!(
            split_word("abcdefg"),
            ("abc".to_string(), "defg".to_string())
        );
    }

    #[test]
    fn test_uppercase_off_center() {
        // Midpoint of "abXcdefg" is index 4; the probe walks outward
        // and finds 'X' at offset 2 below.
        assert_eq!(
            split_word("abXcdefg"),
            ("ab".to_string(), "Xcdefg".to_string())
        );
    }

    #[test]
    fn test_uppercase_at_midpoint() {
        assert_eq!(
            split_word("abcDefg"),
            ("abc".to_string(), "Defg".to_string())
        );
    }

    #[test]
    fn test_leading_uppercase_only() {
        // 'T' at index 0 is within reach of the downward probe
        assert_eq!(
            split_word("Tiny"),
            ("".to_string(), "Tiny".to_string())
        );
    }

    #[test]
    fn test_short_and_empty_words() {
        assert_eq!(split_word(""), ("".to_string(), "".to_string()));
        assert_eq!(split_word("a"), ("".to_string(), "a".to_string()));
        assert_eq!(split_word("ab"), ("a".to_string(), "b".to_string()));
    }

    #[test]
    fn test_multibyte_chars_split_on_char_boundary() {
        let (a, b) = split_word("ééééé");
        assert_eq!(a, "éé");
        assert_eq!(b, "ééé");
    }
}
