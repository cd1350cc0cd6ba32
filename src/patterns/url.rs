use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Optional scheme and www, dot-separated host, tail free of whitespace
    // and bracket/angle characters with balanced-parenthesis tolerance;
    // a bare "domain.tld" also qualifies
    static ref LINK_PATTERN: Regex = Regex::new(
        r#"(?:(?:https?://)?(?:[a-z0-9.\-]+|www|[a-z0-9.\-])[.](?:[^\s()<>]+|\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\))+(?:\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\)|[^\s!()\[\]{};:'".,<>?]))"#
    ).unwrap();

    // Clone-style repository URLs; the literal .git suffix is mandatory
    static ref GIT_REPO_PATTERN: Regex = Regex::new(
        r"(?:git|ssh|https?|git@[\w.]+):(?://)?[\w.@:/~-]+\.git/?"
    ).unwrap();
}

pub fn extract_links(text: &str) -> Vec<String> {
    find_all(&LINK_PATTERN, text)
}

pub fn extract_git_repos(text: &str) -> Vec<String> {
    find_all(&GIT_REPO_PATTERN, text)
}

pub struct LinkExtractor {}

impl PatternExtractor for LinkExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_links(text)
    }
}

pub struct GitRepoExtractor {}

impl PatternExtractor for GitRepoExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_git_repos(text)
    }
}
