// Word tokenizer over Unicode word boundaries.
//
// Splits text at UAX #29 word boundaries and drops the whitespace segments.
// Letters joined by an apostrophe stay one token ("don't", "customer's"),
// and every punctuation mark is a token on its own, so "Great product!"
// yields ["Great", "product", "!"].
//
// Tokens borrow from the input; nothing is allocated per token.

use unicode_segmentation::{UWordBounds, UnicodeSegmentation};

/// Lazily split `text` into tokens.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        bounds: text.split_word_bounds(),
    }
}

/// Iterator over the tokens of a string. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bounds: UWordBounds<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.bounds
            .by_ref()
            .find(|segment| !segment.chars().all(char::is_whitespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_splits_punctuation() {
        assert_eq!(toks("Great product!"), vec!["Great", "product", "!"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(toks("").is_empty());
        assert!(toks(" \t\n ").is_empty());
        assert!(toks("\r\n\r\n").is_empty());
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(toks("don't stop"), vec!["don't", "stop"]);
        assert_eq!(toks("it\u{2019}s fine"), vec!["it\u{2019}s", "fine"]);
    }

    #[test]
    fn test_trailing_apostrophe_is_separate() {
        assert_eq!(toks("users' manual"), vec!["users", "'", "manual"]);
    }

    #[test]
    fn test_repeated_punctuation() {
        assert_eq!(toks("wow!!"), vec!["wow", "!", "!"]);
    }

    #[test]
    fn test_numbers_and_unicode() {
        assert_eq!(toks("5 stars, très bien"), vec!["5", "stars", ",", "très", "bien"]);
    }

    #[test]
    fn test_decimal_numbers_stay_whole() {
        assert_eq!(toks("rated 4.5 stars"), vec!["rated", "4.5", "stars"]);
    }
}
