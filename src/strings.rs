//! Crate-private string helpers shared by the validators.

/// Remove the given separator characters and surrounding whitespace.
///
/// This is pure reshaping: it never rejects, it only deletes. Each scheme's
/// `compact` decides which separators are legitimate for that scheme.
pub(crate) fn clean(number: &str, deletechars: &[char]) -> String {
    number
        .trim()
        .chars()
        .filter(|c| !deletechars.contains(c))
        .collect()
}

/// True when the string is non-empty and consists of ASCII digits only.
pub(crate) fn is_digits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_separators_and_whitespace() {
        assert_eq!(clean(" 12.34-56 ", &[' ', '.', '-']), "123456");
        assert_eq!(clean("ABC", &[]), "ABC");
    }

    #[test]
    fn clean_is_idempotent() {
        let once = clean("83 914 571 673", &[' ']);
        assert_eq!(clean(&once, &[' ']), once);
    }

    #[test]
    fn is_digits_rejects_empty_and_letters() {
        assert!(is_digits("0123456789"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a4"));
        assert!(!is_digits("12 4"));
    }
}
