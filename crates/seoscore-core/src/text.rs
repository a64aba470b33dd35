//! Text statistics shared by the readability analyzer and the SEO checklist.
//!
//! Splitting is deliberately naive: whitespace for words and runs of
//! terminal punctuation for sentences. The readability thresholds used by
//! the checklist were tuned against exactly these counts.

use regex::Regex;
use std::sync::LazyLock;

use crate::html::{self, ContentFormat};

/// One or more sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Plain prose derived from a page's content, computed once per scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    /// Content with markup removed.
    pub plain: String,
    /// Number of whitespace-separated words in `plain`.
    pub word_count: usize,
}

impl DocumentText {
    /// Normalize `content` and count its words.
    #[tracing::instrument(skip(content), fields(content_len = content.len()))]
    pub fn from_content(content: &str, format: ContentFormat) -> Self {
        let plain = html::normalize(content, format);
        let word_count = count_words(&plain);
        tracing::debug!(word_count, "derived document text");
        Self { plain, word_count }
    }
}

/// Split text into words on whitespace, skipping empty tokens.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    split_words(text).count()
}

/// Count sentences by splitting on runs of `.`, `!` and `?`.
///
/// Whitespace-only fragments are ignored. Never returns less than 1, so the
/// result is always safe to divide by.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BREAK
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
        .max(1)
}
