//! Name Collation
//!
//! Locale-style ordering for display names: base letters first, then
//! accents, then case (lower before upper), then raw code points.
//!
//! At the base level whitespace sorts first, then punctuation and symbols,
//! then digits, then letters.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn base_letters(name: &str) -> String {
    name.nfkd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Primary weight of one folded character
fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    };
    (class, c)
}

fn compare_base(a: &str, b: &str) -> Ordering {
    let (a, b) = (base_letters(a), base_letters(b));
    a.chars().map(primary_weight).cmp(b.chars().map(primary_weight))
}

fn with_accents(name: &str) -> String {
    name.nfkd().flat_map(char::to_lowercase).collect()
}

fn case_pattern(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfkd().map(char::is_uppercase)
}

/// Compare two display names the way a user expects a sorted list to read
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_base(a, b)
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_names("toast", "Toast"), Ordering::Less);
        assert_eq!(compare_names("Toast", "Toast"), Ordering::Equal);
    }

    #[test]
    fn test_accents_sort_near_base_letter() {
        assert_eq!(compare_names("crème", "cremf"), Ordering::Less);
        assert_eq!(compare_names("creme", "crème"), Ordering::Less);
    }

    #[test]
    fn test_symbols_before_digits_before_letters() {
        assert_eq!(compare_names("~tilde", "apple"), Ordering::Less);
        assert_eq!(compare_names("{braces}", "1 minute eggs"), Ordering::Less);
        assert_eq!(compare_names("7 layer dip", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Zucchini", "_underscore"), Ordering::Greater);
        assert_eq!(compare_names("a b", "ab"), Ordering::Less);
    }
}
