use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

// Loose shape grammars: digit-optionally-followed-by-hyphen tokens and a
// final digit or X, with no checksum or hyphen-group validation
lazy_static! {
    static ref ISBN13_PATTERN: Regex = Regex::new(r"(?:\d-?){12}[\dxX]").unwrap();
    static ref ISBN10_PATTERN: Regex = Regex::new(r"(?:\d-?){9}[\dxX]").unwrap();
}

pub fn extract_isbn13s(text: &str) -> Vec<String> {
    find_all(&ISBN13_PATTERN, text)
}

pub fn extract_isbn10s(text: &str) -> Vec<String> {
    find_all(&ISBN10_PATTERN, text)
}

pub struct Isbn13Extractor {}

impl PatternExtractor for Isbn13Extractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_isbn13s(text)
    }
}

pub struct Isbn10Extractor {}

impl PatternExtractor for Isbn10Extractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_isbn10s(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_isbn13s() {
        let valid_isbns = vec![
            "978-3-16-148410-0",
            "978-1-56619-909-4",
            "133-1-12144-909-9",
        ];

        for isbn in valid_isbns {
            assert_eq!(
                extract_isbn13s(isbn),
                vec![isbn],
                "ISBN-13 should be extracted whole: {}",
                isbn
            );
        }
    }

    #[test]
    fn test_isbn10s_are_not_isbn13s() {
        let isbn10s = vec!["1-56619-909-3", "1-33342-100-1", "2-33342-362-9"];

        for isbn in isbn10s {
            assert_ne!(
                extract_isbn13s(isbn),
                vec![isbn],
                "ISBN-10 should not be extracted as ISBN-13: {}",
                isbn
            );
        }
    }

    #[test]
    fn test_valid_isbn10s() {
        let valid_isbns = vec!["1-56619-909-3", "1-33342-100-1", "2-33342-362-9"];

        for isbn in valid_isbns {
            assert_eq!(
                extract_isbn10s(isbn),
                vec![isbn],
                "ISBN-10 should be extracted whole: {}",
                isbn
            );
        }
    }

    #[test]
    fn test_isbn13s_are_not_isbn10s() {
        // Only a 10-digit sub-match is found inside an ISBN-13 string
        let isbn13s = vec![
            "978-3-16-148410-0",
            "978-1-56619-909-4",
            "133-1-12144-909-9",
        ];

        for isbn in isbn13s {
            assert_ne!(
                extract_isbn10s(isbn),
                vec![isbn],
                "ISBN-13 should not be extracted as ISBN-10: {}",
                isbn
            );
        }
    }
}
