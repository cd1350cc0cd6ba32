use lazy_static::lazy_static;
use regex::Regex;

use super::{find_all, PatternExtractor};

lazy_static! {
    // H:MM with optional am/pm, or a lone digit with am/pm; 12h and 24h,
    // no range check on the digits themselves
    static ref TIME_PATTERN: Regex = Regex::new(
        r"(?i)\d{1,2}:\d{2} ?(?:[ap]\.?m\.?)?|\d[ap]\.?m\.?"
    ).unwrap();
}

pub fn extract_times(text: &str) -> Vec<String> {
    find_all(&TIME_PATTERN, text)
}

pub struct TimeExtractor {}

impl PatternExtractor for TimeExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        extract_times(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_times() {
        let valid_times = vec![
            "09:45",
            "9:45",
            "23:45",
            "9:00am",
            "9am",
            "9:00 A.M.",
            "9:00 pm",
        ];

        for time in valid_times {
            assert_eq!(
                extract_times(time),
                vec![time],
                "Time should be extracted whole: {}",
                time
            );
        }
    }

    #[test]
    fn test_no_times() {
        let non_times = vec!["", ":45", "am"];

        for text in non_times {
            assert!(
                extract_times(text).is_empty(),
                "Text should contain no time: {}",
                text
            );
        }
    }
}
