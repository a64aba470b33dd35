//! Focus keyword placement checks.
//!
//! Matching is a case-insensitive substring test, never whole-word. A blank
//! keyword fails every check here with a prompt to set one.

use super::reports::{CheckId, CheckResult};

/// How much of the body copy counts as the first paragraph, in characters.
pub const INTRODUCTION_CHARS: usize = 300;

const UNSET_MESSAGE: &str = "Set a focus keyword first";

/// A lowercased focus keyword, or `None` when the author has not set one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusKeyword(Option<String>);

impl FocusKeyword {
    /// Prepare a raw keyword for matching.
    pub fn new(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(raw.to_lowercase()))
        }
    }

    /// Whether a keyword was provided.
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    fn found_in(keyword: &str, haystack: &str) -> bool {
        haystack.to_lowercase().contains(keyword)
    }
}

/// Check 1: keyword in the page title.
pub fn in_title(keyword: &FocusKeyword, title: &str) -> CheckResult {
    let id = CheckId::KeywordInTitle;
    match &keyword.0 {
        None => CheckResult::fail(id, UNSET_MESSAGE),
        Some(kw) if FocusKeyword::found_in(kw, title) => {
            CheckResult::pass(id, "Focus keyword appears in the title")
        }
        Some(_) => CheckResult::fail(id, "Add the focus keyword to the title"),
    }
}

/// Check 2: keyword in the meta description.
pub fn in_meta_description(keyword: &FocusKeyword, meta_description: &str) -> CheckResult {
    let id = CheckId::KeywordInMetaDescription;
    match &keyword.0 {
        None => CheckResult::fail(id, UNSET_MESSAGE),
        Some(kw) if FocusKeyword::found_in(kw, meta_description) => {
            CheckResult::pass(id, "Focus keyword appears in the meta description")
        }
        Some(_) => CheckResult::fail(id, "Add the focus keyword to the meta description"),
    }
}

/// Check 3: keyword in the URL slug.
///
/// Only spaces are turned into hyphens before matching. No other slug
/// normalization happens, so accented or punctuated keywords may not match.
pub fn in_slug(keyword: &FocusKeyword, slug: &str) -> CheckResult {
    let id = CheckId::KeywordInSlug;
    match &keyword.0 {
        None => CheckResult::fail(id, UNSET_MESSAGE),
        Some(kw) => {
            let hyphenated = kw.replace(' ', "-");
            if FocusKeyword::found_in(&hyphenated, slug) {
                CheckResult::pass(id, format!("URL slug contains \"{hyphenated}\""))
            } else {
                CheckResult::fail(id, format!("Add \"{hyphenated}\" to the URL slug"))
            }
        }
    }
}

/// Check 4: keyword within the first [`INTRODUCTION_CHARS`] characters of body copy.
pub fn in_introduction(keyword: &FocusKeyword, plain_text: &str) -> CheckResult {
    let id = CheckId::KeywordInIntroduction;
    match &keyword.0 {
        None => CheckResult::fail(id, UNSET_MESSAGE),
        Some(kw) => {
            let introduction: String = plain_text.chars().take(INTRODUCTION_CHARS).collect();
            if FocusKeyword::found_in(kw, &introduction) {
                CheckResult::pass(id, "Focus keyword appears in the first paragraph")
            } else {
                CheckResult::fail(
                    id,
                    format!("Use the focus keyword within the first {INTRODUCTION_CHARS} characters"),
                )
            }
        }
    }
}
