//! # Word Normalization
//!
//! The single tokenization routine shared by vocabulary building and
//! batch vectorization:
//!
//! 1. lowercase the text;
//! 2. remove newline characters (joining the words on either side);
//! 3. collapse every run of non-word characters to a single space;
//! 4. split on whitespace.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern matching a run of non-word characters.
pub const NON_WORD_PATTERN: &str = r"\W+";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_WORD_PATTERN).expect("regex pattern compilation failed"));

/// Normalize text into a single-space separated word string.
///
/// The result may carry a leading or trailing space;
/// use [`words`] or [`tokenize`] to get the words.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase().replace('\n', "");
    NON_WORD.replace_all(&lowered, " ").into_owned()
}

/// Iterate the words of an already-normalized string.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalize and split text into word tokens.
///
/// ## Arguments
/// * `text` - the raw record text.
///
/// ## Returns
/// The tokens, in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    words(&normalize_text(text)).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(
            tokenize("I LOVE it!!! Really..."),
            vec!["i", "love", "it", "really"]
        );
    }

    #[test]
    fn test_newlines_are_removed_not_spaced() {
        assert_eq!(tokenize("foo\nbar baz"), vec!["foobar", "baz"]);
    }

    #[test]
    fn test_non_word_runs_collapse() {
        assert_eq!(normalize_text("a -- b"), "a b");
        assert_eq!(normalize_text("@user: hi"), " user hi");
        assert_eq!(tokenize("@user: hi"), vec!["user", "hi"]);
    }

    #[test]
    fn test_underscores_and_digits_are_word_chars() {
        assert_eq!(tokenize("snake_case 42x"), vec!["snake_case", "42x"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Café NAÏVE"), vec!["café", "naïve"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ??? ...").is_empty());
    }
}
