//! Body copy checks: length and readability.

use crate::readability::{Grade, MIN_WORDS, ReadabilityResult};

use super::reports::{CheckId, CheckResult};

/// Word count for full content-length points.
pub const FULL_LENGTH_WORDS: usize = 300;
/// Word count for partial content-length points.
pub const PARTIAL_LENGTH_WORDS: usize = 150;
const PARTIAL_LENGTH_POINTS: u8 = 10;

/// Readability score for full points.
pub const FULL_READABILITY: u8 = 40;
/// Readability score for partial points.
pub const PARTIAL_READABILITY: u8 = 25;
const PARTIAL_READABILITY_POINTS: u8 = 5;

/// Check 5: body copy length in words.
pub fn length(word_count: usize) -> CheckResult {
    let id = CheckId::ContentLength;
    if word_count >= FULL_LENGTH_WORDS {
        CheckResult::pass(id, format!("{word_count} words"))
    } else if word_count >= PARTIAL_LENGTH_WORDS {
        CheckResult::partial(
            id,
            PARTIAL_LENGTH_POINTS,
            format!("{word_count} words (aim for {FULL_LENGTH_WORDS}+)"),
        )
    } else {
        CheckResult::fail(
            id,
            format!("Only {word_count} words (aim for {FULL_LENGTH_WORDS}+)"),
        )
    }
}

/// Check 11: readability score of the body copy.
pub fn readability(result: &ReadabilityResult) -> CheckResult {
    let id = CheckId::Readability;
    let score = result.score;
    if result.grade == Grade::NotApplicable {
        CheckResult::fail(
            id,
            format!("Too little text to grade readability, add more content ({MIN_WORDS}+ words)"),
        )
    } else if score >= FULL_READABILITY {
        CheckResult::pass(id, format!("Readability score {score} ({})", result.label))
    } else if score >= PARTIAL_READABILITY {
        CheckResult::partial(
            id,
            PARTIAL_READABILITY_POINTS,
            format!("Readability score {score} ({}), try shorter sentences", result.label),
        )
    } else {
        CheckResult::fail(
            id,
            format!("Readability score {score} ({}), simplify your writing", result.label),
        )
    }
}
