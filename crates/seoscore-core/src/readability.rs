//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier. The raw score is rounded and clamped to 0–100, then
//! banded into a letter grade.
//!
//! Syllables come from a vowel-run heuristic, not a dictionary. It misjudges
//! plenty of English words, but the checklist's readability thresholds were
//! tuned against its output, so it must stay as it is.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::html::ContentFormat;
use crate::text::{self, DocumentText};

/// Below this many words the statistics are meaningless.
pub const MIN_WORDS: usize = 10;

/// Words with at least this many estimated syllables count as complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Letter banding of a readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    /// 80 and above.
    A,
    /// 70–79.
    B,
    /// 60–69.
    C,
    /// 50–59.
    D,
    /// 30–49.
    E,
    /// Below 30.
    F,
    /// Too little content to grade.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Grade {
    /// Returns the grade as displayed to authors.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Normalized Flesch Reading Ease (0–100, 100 = easiest).
    pub score: u8,
    /// Letter band for `score`.
    pub grade: Grade,
    /// Human label matching the grade band.
    pub label: String,
    /// Mean words per sentence, rounded.
    pub avg_sentence_length: u32,
    /// Percentage of words with three or more syllables, rounded.
    pub complex_word_percentage: u8,
}

impl ReadabilityResult {
    /// The fixed result for content under [`MIN_WORDS`] words.
    pub fn insufficient() -> Self {
        Self {
            score: 0,
            grade: Grade::NotApplicable,
            label: "Add more content".to_string(),
            avg_sentence_length: 0,
            complex_word_percentage: 0,
        }
    }
}

/// Analyze plain text whose word count is already known.
///
/// `word_count` must be the whitespace word count of `text`; the SEO
/// checklist passes the count it already computed so the text is only
/// tokenized once for that purpose.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, word_count: usize) -> ReadabilityResult {
    if word_count < MIN_WORDS {
        tracing::debug!("too few words to score readability");
        return ReadabilityResult::insufficient();
    }

    let sentences = text::count_sentences(text);
    let words = word_count as f64;
    let avg_sentence_length = words / sentences as f64;

    let mut total_syllables = 0usize;
    let mut complex_words = 0usize;
    for word in text::split_words(text) {
        let syllables = estimate_syllables(word);
        total_syllables += syllables;
        if syllables >= COMPLEX_WORD_SYLLABLES {
            complex_words += 1;
        }
    }
    let avg_syllables_per_word = total_syllables as f64 / words;

    let flesch = 1.015f64
        .mul_add(-avg_sentence_length, 84.6f64.mul_add(-avg_syllables_per_word, 206.835))
        .round();
    let score = flesch.clamp(0.0, 100.0) as u8;
    let (grade, label) = band(score);
    let complex_word_percentage = (100.0 * complex_words as f64 / words).round().min(100.0) as u8;

    tracing::debug!(
        sentences,
        total_syllables,
        complex_words,
        flesch,
        score,
        "scored readability"
    );

    ReadabilityResult {
        score,
        grade,
        label: label.to_string(),
        avg_sentence_length: avg_sentence_length.round() as u32,
        complex_word_percentage,
    }
}

/// Normalize `content` and score its readability.
pub fn check_readability(content: &str, format: ContentFormat) -> ReadabilityResult {
    let doc = DocumentText::from_content(content, format);
    analyze(&doc.plain, doc.word_count)
}

/// Map a normalized score to its grade and label. First match wins.
pub const fn band(score: u8) -> (Grade, &'static str) {
    match score {
        80.. => (Grade::A, "Very Easy"),
        70.. => (Grade::B, "Easy"),
        60.. => (Grade::C, "Standard"),
        50.. => (Grade::D, "Fairly Difficult"),
        30.. => (Grade::E, "Difficult"),
        _ => (Grade::F, "Very Difficult"),
    }
}

/// Estimate the syllables in one word.
///
/// Lowercases, keeps only `a`–`z`, then counts vowel runs (`y` included).
/// Short words are one syllable. A trailing `e` is treated as silent unless
/// the word ends in `le`. Never returns less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect();

    if word.len() <= 3 {
        return 1;
    }

    let mut count = VOWEL_RUN.find_iter(&word).count().max(1);
    if word.ends_with('e') {
        count -= 1;
    }
    if word.ends_with("le") {
        count += 1;
    }
    count.max(1)
}
