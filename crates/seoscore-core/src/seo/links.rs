//! Markup checks run against the raw HTML.
//!
//! These are plain substring tests on the author's source, not a parse. They
//! only look at the exact quoting and casing shown.

use super::reports::{CheckId, CheckResult};

const ALT_ATTRIBUTE: &str = "alt=";
const INTERNAL_HREFS: [&str; 2] = ["href=\"/", "href='/"];
const EXTERNAL_HREFS: [&str; 2] = ["href=\"http", "href='http"];

fn count_all(html: &str, needles: &[&str]) -> usize {
    needles.iter().map(|needle| html.matches(needle).count()).sum()
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Check 8: at least one `alt=` attribute.
pub fn image_alt_text(html: &str) -> CheckResult {
    let id = CheckId::ImageAltText;
    let found = html.matches(ALT_ATTRIBUTE).count();
    if found > 0 {
        CheckResult::pass(id, format!("Found {found} alt attribute{}", plural(found)))
    } else {
        CheckResult::fail(id, "Add images with descriptive alt text")
    }
}

/// Check 9: at least one root-relative link.
pub fn internal_links(html: &str) -> CheckResult {
    let id = CheckId::InternalLinks;
    let found = count_all(html, &INTERNAL_HREFS);
    if found > 0 {
        CheckResult::pass(id, format!("Found {found} internal link{}", plural(found)))
    } else {
        CheckResult::fail(id, "Add links to related pages on this site")
    }
}

/// Check 10: at least one absolute http(s) link.
pub fn external_links(html: &str) -> CheckResult {
    let id = CheckId::ExternalLinks;
    let found = count_all(html, &EXTERNAL_HREFS);
    if found > 0 {
        CheckResult::pass(id, format!("Found {found} external link{}", plural(found)))
    } else {
        CheckResult::fail(id, "Add links to authoritative external sources")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_attribute_detected() {
        assert!(image_alt_text(r#"<img src="a.png" alt="A pizza">"#).passed);
        assert!(image_alt_text(r#"<img alt='' src="a.png">"#).passed);
        assert!(!image_alt_text(r#"<img src="a.png">"#).passed);
    }

    #[test]
    fn internal_links_either_quote() {
        assert!(internal_links(r#"<a href="/menu">Menu</a>"#).passed);
        assert!(internal_links("<a href='/menu'>Menu</a>").passed);
        assert!(!internal_links(r#"<a href="menu.html">Menu</a>"#).passed);
    }

    #[test]
    fn external_links_either_quote() {
        assert!(external_links(r#"<a href="https://example.com">x</a>"#).passed);
        assert!(external_links("<a href='http://example.com'>x</a>").passed);
        assert!(!external_links(r#"<a href="/local">x</a>"#).passed);
    }

    #[test]
    fn matching_is_exact() {
        // Spaced or upper-case attributes are not recognised.
        assert!(!internal_links(r#"<a href = "/menu">"#).passed);
        assert!(!external_links(r#"<a HREF="https://example.com">"#).passed);
    }

    #[test]
    fn messages_report_counts() {
        let html = r#"<a href="/a">a</a> <a href='/b'>b</a> <img alt="x">"#;
        assert_eq!(internal_links(html).message, "Found 2 internal links");
        assert_eq!(image_alt_text(html).message, "Found 1 alt attribute");
    }

    #[test]
    fn points_match_weights() {
        assert_eq!(image_alt_text("alt=\"x\"").points, 10);
        assert_eq!(internal_links("href=\"/").points, 10);
        assert_eq!(external_links("href=\"http").points, 5);
    }
}
