//! Result types for the SEO checklist.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. Field names are
//! camelCase on the wire because the consumers are editor front ends.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityResult;

/// Number of rules in the checklist.
pub const CHECK_COUNT: usize = 11;

/// Sum of every rule's maximum points.
pub const MAX_SCORE: u8 = 100;

/// Identifies one checklist rule.
///
/// Declaration order is evaluation and presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    /// Focus keyword appears in the page title.
    KeywordInTitle,
    /// Focus keyword appears in the meta description.
    KeywordInMetaDescription,
    /// Focus keyword appears in the URL slug.
    KeywordInSlug,
    /// Focus keyword appears early in the body copy.
    KeywordInIntroduction,
    /// Body copy is long enough.
    ContentLength,
    /// Meta title fits search result snippets.
    MetaTitleLength,
    /// Meta description fits search result snippets.
    MetaDescriptionLength,
    /// Images carry alt text.
    ImageAltText,
    /// Content links to other pages on the site.
    InternalLinks,
    /// Content links out to other sites.
    ExternalLinks,
    /// Body copy is easy enough to read.
    Readability,
}

impl CheckId {
    /// Every rule, in evaluation order.
    pub const ALL: [Self; CHECK_COUNT] = [
        Self::KeywordInTitle,
        Self::KeywordInMetaDescription,
        Self::KeywordInSlug,
        Self::KeywordInIntroduction,
        Self::ContentLength,
        Self::MetaTitleLength,
        Self::MetaDescriptionLength,
        Self::ImageAltText,
        Self::InternalLinks,
        Self::ExternalLinks,
        Self::Readability,
    ];

    /// Human-readable rule name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::KeywordInTitle => "Focus keyword in title",
            Self::KeywordInMetaDescription => "Focus keyword in meta description",
            Self::KeywordInSlug => "Focus keyword in URL",
            Self::KeywordInIntroduction => "Focus keyword in first paragraph",
            Self::ContentLength => "Content length",
            Self::MetaTitleLength => "Meta title length",
            Self::MetaDescriptionLength => "Meta description length",
            Self::ImageAltText => "Image alt tags",
            Self::InternalLinks => "Internal links",
            Self::ExternalLinks => "External links",
            Self::Readability => "Readability",
        }
    }

    /// Points available for this rule.
    pub const fn max_points(&self) -> u8 {
        match self {
            Self::ContentLength => 15,
            Self::MetaTitleLength | Self::MetaDescriptionLength | Self::ExternalLinks => 5,
            _ => 10,
        }
    }
}

/// Visual treatment of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Full points awarded.
    Pass,
    /// Intermediate tier awarded.
    Partial,
    /// No points awarded.
    Fail,
}

/// Outcome of one checklist rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Which rule produced this result.
    pub id: CheckId,
    /// Human-readable rule name.
    pub label: String,
    /// Points awarded this run.
    pub points: u8,
    /// Points possible for this rule.
    pub max_points: u8,
    /// Whether the rule was fully or partially satisfied.
    pub passed: bool,
    /// Whether only the intermediate tier was reached.
    #[serde(default)]
    pub partial: bool,
    /// Explanation of the outcome, including measured values.
    pub message: String,
}

impl CheckResult {
    fn new(id: CheckId, points: u8, passed: bool, partial: bool, message: String) -> Self {
        debug_assert!(points <= id.max_points(), "{id:?} awarded {points} points");
        Self {
            id,
            label: id.label().to_string(),
            points: points.min(id.max_points()),
            max_points: id.max_points(),
            passed,
            partial,
            message,
        }
    }

    /// Full marks.
    pub fn pass(id: CheckId, message: impl Into<String>) -> Self {
        Self::new(id, id.max_points(), true, false, message.into())
    }

    /// The rule's intermediate tier, worth `points`.
    pub fn partial(id: CheckId, points: u8, message: impl Into<String>) -> Self {
        Self::new(id, points, true, true, message.into())
    }

    /// No points.
    pub fn fail(id: CheckId, message: impl Into<String>) -> Self {
        Self::new(id, 0, false, false, message.into())
    }

    /// Pass, partial or fail, for rendering.
    pub const fn status(&self) -> CheckStatus {
        if self.partial {
            CheckStatus::Partial
        } else if self.passed {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

/// Aggregate result of scoring one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Sum of every check's points (0–100).
    pub score: u8,
    /// One result per rule, in [`CheckId::ALL`] order.
    pub checks: [CheckResult; CHECK_COUNT],
    /// Readability analysis of the body copy.
    pub readability: ReadabilityResult,
}

impl ScoreResult {
    /// Points possible across the whole checklist.
    pub const fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    /// Number of checks that passed fully or partially.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Look up one rule's result.
    pub fn check(&self, id: CheckId) -> &CheckResult {
        &self.checks[id as usize]
    }

    /// Whether the score reaches `min_score`.
    pub const fn meets(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}
