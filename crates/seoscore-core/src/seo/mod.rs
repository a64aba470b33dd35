//! SEO checklist scoring.
//!
//! Eleven independent, weighted rules orchestrated by [`score_content`].
//! Each rule is a pure function in one of the submodules; callers can also
//! invoke them individually. No rule reads another rule's outcome, so the
//! total is a plain sum.

pub mod content;
pub mod keyword;
pub mod links;
pub mod meta;
pub mod reports;

pub use reports::{CHECK_COUNT, CheckId, CheckResult, CheckStatus, MAX_SCORE, ScoreResult};

use crate::html::ContentFormat;
use crate::input::ScoringInput;
use crate::readability;
use crate::text::DocumentText;

use keyword::FocusKeyword;

/// Score a page whose `content` is HTML.
pub fn score_content(input: &ScoringInput) -> ScoreResult {
    score_content_as(input, ContentFormat::Html)
}

/// Score a page, interpreting `content` according to `format`.
///
/// Link and alt-text checks always look at `content` as given; only the
/// word-based checks see the normalized text.
#[tracing::instrument(skip(input), fields(content_len = input.content.len()))]
pub fn score_content_as(input: &ScoringInput, format: ContentFormat) -> ScoreResult {
    let doc = DocumentText::from_content(&input.content, format);
    let readability = readability::analyze(&doc.plain, doc.word_count);
    let keyword = FocusKeyword::new(&input.focus_keyword);

    let checks = [
        keyword::in_title(&keyword, &input.title),
        keyword::in_meta_description(&keyword, &input.meta_description),
        keyword::in_slug(&keyword, &input.slug),
        keyword::in_introduction(&keyword, &doc.plain),
        content::length(doc.word_count),
        meta::title_length(&input.meta_title),
        meta::description_length(&input.meta_description),
        links::image_alt_text(&input.content),
        links::internal_links(&input.content),
        links::external_links(&input.content),
        content::readability(&readability),
    ];

    let score: u8 = checks.iter().map(|c| c.points).sum();

    tracing::info!(
        score,
        passed = checks.iter().filter(|c| c.passed).count(),
        readability = readability.score,
        keyword_set = keyword.is_set(),
        "scored page"
    );

    ScoreResult {
        score,
        checks,
        readability,
    }
}
