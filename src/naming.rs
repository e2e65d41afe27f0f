//! Output filenames: timestamp + summary token, shared by every file of a run.

use chrono::{DateTime, Local};

/// Builds the base filename for a run: `YYYYMMDD-HHMMSS-<token>`.
pub fn base_name(now: DateTime<Local>, token: &str) -> String {
    format!("{}-{token}", now.format("%Y%m%d-%H%M%S"))
}

/// Name for the nth image of a run, 1-based and zero-padded to two digits.
pub fn image_file_name(base: &str, index: usize) -> String {
    format!("{base}-{index:02}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_base_name_format() {
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 42).unwrap();
        assert_eq!(base_name(now, "Tea-ceremony"), "20260307-090542-Tea-ceremony");
    }

    #[test]
    fn test_base_name_stable_within_a_second() {
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 42).unwrap();
        assert_eq!(base_name(now, "t"), base_name(now, "t"));
        let later = now + chrono::Duration::seconds(1);
        assert_ne!(base_name(now, "t"), base_name(later, "t"));
    }

    #[test]
    fn test_image_file_name_zero_padded() {
        assert_eq!(image_file_name("base", 1), "base-01.png");
        assert_eq!(image_file_name("base", 10), "base-10.png");
    }
}
