use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // Six 2-hex-digit groups, separated uniformly by : or uniformly by -;
    // the two branches keep mixed-separator addresses from matching
    static ref MAC_ADDRESS_PATTERN: Regex = Regex::new(
        r"(?:[a-fA-F0-9]{2}:){5}[a-fA-F0-9]{2}|(?:[a-fA-F0-9]{2}-){5}[a-fA-F0-9]{2}"
    ).unwrap();
}

pub fn extract_mac_addresses(text: &str) -> Vec<String> {
    find_all(&MAC_ADDRESS_PATTERN, text)
}

pub struct MacAddressExtractor {}

impl PatternExtractor for MacAddressExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_mac_addresses(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mac_addresses() {
        let valid_macs = vec![
            "f8:2f:a4:fe:76:d2",
            "F8:2F:A4:FE:76:D2",
            "3D-F2-C9-A6-B3-4F",
        ];

        for mac in valid_macs {
            assert_eq!(
                extract_mac_addresses(mac),
                vec![mac],
                "MAC address should be extracted whole: {}",
                mac
            );
        }
    }

    #[test]
    fn test_invalid_mac_addresses() {
        let invalid_macs = vec!["3D:F2:C9:A6:B3:4G", "f0:2f:P4:Be:96:J5"];

        for mac in invalid_macs {
            assert_ne!(
                extract_mac_addresses(mac),
                vec![mac],
                "MAC address should not be extracted whole: {}",
                mac
            );
        }
    }

    #[test]
    fn test_mixed_separators_are_rejected() {
        assert!(
            extract_mac_addresses("3D:F2-C9:A6:B3:4F").is_empty(),
            "MAC address with mixed separators should not match"
        );
    }
}
