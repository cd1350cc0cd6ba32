use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

const IPV4_EXPR: &str = r"(?:(?:[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}(?:[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])";

// Full canonical form, zero-compressed form, and embedded trailing IPv4,
// with an optional %zone suffix
const IPV6_EXPR: &str = r"(?:(?:(?:[0-9A-Fa-f]{1,4}:){7}(?:[0-9A-Fa-f]{1,4}|:))|(?:(?:[0-9A-Fa-f]{1,4}:){6}(?::[0-9A-Fa-f]{1,4}|(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3})|:))|(?:(?:[0-9A-Fa-f]{1,4}:){5}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,2})|:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3})|:))|(?:(?:[0-9A-Fa-f]{1,4}:){4}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,3})|(?:(?::[0-9A-Fa-f]{1,4})?:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){3}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,4})|(?:(?::[0-9A-Fa-f]{1,4}){0,2}:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){2}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,5})|(?:(?::[0-9A-Fa-f]{1,4}){0,3}:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|(?:(?:[0-9A-Fa-f]{1,4}:){1}(?:(?:(?::[0-9A-Fa-f]{1,4}){1,6})|(?:(?::[0-9A-Fa-f]{1,4}){0,4}:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:))|(?::(?:(?:(?::[0-9A-Fa-f]{1,4}){1,7})|(?:(?::[0-9A-Fa-f]{1,4}){0,5}:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}))|:)))(?:%.+)?\s*";

lazy_static! {
    static ref IPV4_PATTERN: Regex = Regex::new(IPV4_EXPR).unwrap();
    static ref IPV6_PATTERN: Regex = Regex::new(IPV6_EXPR).unwrap();
    static ref IP_PATTERN: Regex =
        Regex::new(&format!("{}|{}", IPV4_EXPR, IPV6_EXPR)).unwrap();
}

pub fn extract_ipv4s(text: &str) -> Vec<String> {
    find_all(&IPV4_PATTERN, text)
}

pub fn extract_ipv6s(text: &str) -> Vec<String> {
    find_all(&IPV6_PATTERN, text)
}

/// Both address families in one scan.
pub fn extract_ips(text: &str) -> Vec<String> {
    find_all(&IP_PATTERN, text)
}

pub struct Ipv4Extractor {}

impl PatternExtractor for Ipv4Extractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_ipv4s(text)
    }
}

pub struct Ipv6Extractor {}

impl PatternExtractor for Ipv6Extractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_ipv6s(text)
    }
}

pub struct IpExtractor {}

impl PatternExtractor for IpExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_ips(text)
    }
}
