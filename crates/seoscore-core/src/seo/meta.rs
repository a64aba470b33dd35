//! Meta tag length checks.

use std::ops::RangeInclusive;

use super::reports::{CheckId, CheckResult};

/// Meta title lengths that display without truncation.
pub const META_TITLE_CHARS: RangeInclusive<usize> = 50..=60;

/// Meta description lengths that display without truncation.
pub const META_DESCRIPTION_CHARS: RangeInclusive<usize> = 120..=160;

/// Check 6: meta title length.
pub fn title_length(meta_title: &str) -> CheckResult {
    length_check(CheckId::MetaTitleLength, "Meta title", meta_title, META_TITLE_CHARS)
}

/// Check 7: meta description length.
pub fn description_length(meta_description: &str) -> CheckResult {
    length_check(
        CheckId::MetaDescriptionLength,
        "Meta description",
        meta_description,
        META_DESCRIPTION_CHARS,
    )
}

fn length_check(id: CheckId, what: &str, value: &str, range: RangeInclusive<usize>) -> CheckResult {
    let len = value.chars().count();
    let (min, max) = (*range.start(), *range.end());
    if range.contains(&len) {
        CheckResult::pass(id, format!("{what} is {len} characters"))
    } else if len < min {
        CheckResult::fail(id, format!("{what} is {len} characters (aim for {min}-{max})"))
    } else {
        CheckResult::fail(
            id,
            format!("{what} is {len} characters, too long (aim for {min}-{max})"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_boundaries() {
        assert!(title_length(&"x".repeat(50)).passed);
        assert!(title_length(&"x".repeat(60)).passed);
        assert!(!title_length(&"x".repeat(49)).passed);
        assert!(!title_length(&"x".repeat(61)).passed);
    }

    #[test]
    fn description_boundaries() {
        assert!(description_length(&"x".repeat(120)).passed);
        assert!(description_length(&"x".repeat(160)).passed);
        assert!(!description_length(&"x".repeat(119)).passed);
        assert!(!description_length(&"x".repeat(161)).passed);
    }

    #[test]
    fn message_reports_measured_length() {
        let check = title_length("Short");
        assert_eq!(check.points, 0);
        assert_eq!(check.message, "Meta title is 5 characters (aim for 50-60)");

        let check = description_length(&"y".repeat(170));
        assert!(check.message.contains("170 characters"));
        assert!(check.message.contains("too long"));
    }

    #[test]
    fn empty_title_fails() {
        let check = title_length("");
        assert!(!check.passed);
        assert!(check.message.contains("0 characters"));
    }

    #[test]
    fn length_counts_characters() {
        // 50 characters, 52 bytes.
        let title = format!("{}–é", "x".repeat(48));
        assert_eq!(title.chars().count(), 50);
        assert!(title_length(&title).passed);
    }
}
