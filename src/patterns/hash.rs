use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

// Fixed-width hex runs; shape checks only, not digest validators
lazy_static! {
    static ref MD5_HEX_PATTERN: Regex = Regex::new(r"[0-9a-fA-F]{32}").unwrap();
    static ref SHA1_HEX_PATTERN: Regex = Regex::new(r"[0-9a-fA-F]{40}").unwrap();
    static ref SHA256_HEX_PATTERN: Regex = Regex::new(r"[0-9a-fA-F]{64}").unwrap();
}

pub fn extract_md5_hexes(text: &str) -> Vec<String> {
    find_all(&MD5_HEX_PATTERN, text)
}

pub fn extract_sha1_hexes(text: &str) -> Vec<String> {
    find_all(&SHA1_HEX_PATTERN, text)
}

pub fn extract_sha256_hexes(text: &str) -> Vec<String> {
    find_all(&SHA256_HEX_PATTERN, text)
}

pub struct Md5HexExtractor {}

impl PatternExtractor for Md5HexExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_md5_hexes(text)
    }
}

pub struct Sha1HexExtractor {}

impl PatternExtractor for Sha1HexExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_sha1_hexes(text)
    }
}

pub struct Sha256HexExtractor {}

impl PatternExtractor for Sha256HexExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_sha256_hexes(text)
    }
}
