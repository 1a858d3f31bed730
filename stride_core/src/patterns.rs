//! Named patterns used to recognise structure in hand-edited sheets.
//!
//! Each pattern is compiled once and has its own tests, so the edge cases
//! (case sensitivity, optional punctuation) can be checked in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

/// `Week 3`, `week3`, `WEEK 12 - deload`
pub static WEEK_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)week\s*(\d+)").expect("valid week pattern"));

/// `Day 1`, `day2`, `DAY 4: Upper`
pub static DAY_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)day\s*(\d+)").expect("valid day pattern"));

/// Numbered day header prefix, matched against trimmed lower-cased text
pub static DAY_HEADER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^day\s+\d").expect("valid day header pattern"));

/// Superset code: one letter followed by its position, e.g. `A1`, `b2`
pub static SUPERSET_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z])(\d+)$").expect("valid superset pattern"));

/// Numbered list item such as `1.` or `2 . Cat-Cow`
pub static NUMBERED_CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*\.\s*").expect("valid numbered pattern"));

/// Link to a video hosting platform; stops at the first whitespace
pub static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.|m\.)?(?:youtube\.com|youtu\.be|vimeo\.com)/\S+")
        .expect("valid video url pattern")
});

/// Exercise code used by the history columns, upper-case only
pub static HISTORY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\d+$").expect("valid history code pattern"));

/// Section titles that open a workout even without a day number
pub const KNOWN_SECTION_TITLES: &[&str] = &[
    "lower strength",
    "upper strength",
    "full body",
    "running ip",
    "workout a",
    "workout b",
    "workout c",
    "workout d",
];

/// First-column labels of rows that never hold an exercise
pub const SKIP_LABELS: &[&str] = &["scales", "notes", "date", "weight"];

/// Extract the first capture group of `pattern` as a number
pub fn capture_number(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_number() {
        assert_eq!(capture_number(&WEEK_NUMBER, "Week 3"), Some(3));
        assert_eq!(capture_number(&WEEK_NUMBER, "WEEK12 deload"), Some(12));
        assert_eq!(capture_number(&WEEK_NUMBER, "Training week 2"), Some(2));
        assert_eq!(capture_number(&WEEK_NUMBER, "Weekly notes"), None);
        assert_eq!(capture_number(&WEEK_NUMBER, "Week"), None);
    }

    #[test]
    fn test_day_number() {
        assert_eq!(capture_number(&DAY_NUMBER, "Day 1"), Some(1));
        assert_eq!(capture_number(&DAY_NUMBER, "day4: Lower"), Some(4));
        assert_eq!(capture_number(&DAY_NUMBER, "Lower Strength"), None);
    }

    #[test]
    fn test_day_header_prefix() {
        assert!(DAY_HEADER_PREFIX.is_match("day 1"));
        assert!(DAY_HEADER_PREFIX.is_match("day  2 - upper"));
        assert!(!DAY_HEADER_PREFIX.is_match("day one"));
        assert!(!DAY_HEADER_PREFIX.is_match("today 1"));
        assert!(!DAY_HEADER_PREFIX.is_match("day1"));
    }

    #[test]
    fn test_superset_code() {
        let caps = SUPERSET_CODE.captures("b2").unwrap();
        assert_eq!(&caps[1], "b");
        assert_eq!(&caps[2], "2");
        assert!(SUPERSET_CODE.is_match("A10"));
        assert!(!SUPERSET_CODE.is_match("AB1"));
        assert!(!SUPERSET_CODE.is_match("A"));
        assert!(!SUPERSET_CODE.is_match("A1 "));
        assert!(!SUPERSET_CODE.is_match("1A"));
    }

    #[test]
    fn test_numbered_continuation() {
        assert!(NUMBERED_CONTINUATION.is_match("1."));
        assert!(NUMBERED_CONTINUATION.is_match("2 . Cat-Cow"));
        assert!(NUMBERED_CONTINUATION.is_match("10.Hip Circles"));
        assert!(!NUMBERED_CONTINUATION.is_match("A1"));
        assert!(!NUMBERED_CONTINUATION.is_match("3x10"));
    }

    #[test]
    fn test_video_url() {
        let text = "see https://www.youtube.com/watch?v=abc12345678 extra text";
        assert_eq!(
            VIDEO_URL.find(text).map(|m| m.as_str()),
            Some("https://www.youtube.com/watch?v=abc12345678")
        );
        assert_eq!(
            VIDEO_URL.find("youtu.be/xyz").map(|m| m.as_str()),
            Some("youtu.be/xyz")
        );
        assert!(VIDEO_URL.is_match("https://vimeo.com/12345"));
        assert!(VIDEO_URL.is_match("HTTPS://M.YOUTUBE.COM/watch?v=1"));
        assert!(!VIDEO_URL.is_match("https://example.com/video"));
    }

    #[test]
    fn test_history_code() {
        assert!(HISTORY_CODE.is_match("A1"));
        assert!(!HISTORY_CODE.is_match("a1"));
        assert!(!HISTORY_CODE.is_match("Push Up"));
    }

    #[test]
    fn test_capture_number_overflow() {
        assert_eq!(capture_number(&WEEK_NUMBER, "week 99999999999"), None);
    }
}
