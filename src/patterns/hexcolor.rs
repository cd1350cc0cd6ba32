use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Optional leading #, then exactly 6 or exactly 3 hex digits
    static ref HEX_COLOR_PATTERN: Regex = Regex::new(
        r"#?(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})"
    ).unwrap();
}

pub fn extract_hex_colors(text: &str) -> Vec<String> {
    find_all(&HEX_COLOR_PATTERN, text)
}

pub struct HexColorExtractor {}

impl PatternExtractor for HexColorExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_hex_colors(text)
    }
}
