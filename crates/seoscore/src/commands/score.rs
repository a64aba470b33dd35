//! Score command: run the SEO checklist against a page record.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscore_core::seo::{CheckResult, CheckStatus, ScoreResult};
use seoscore_core::{ContentFormat, ScoringInput, score_content_as};

use super::check_input_size;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Page record to score (TOML, YAML or JSON).
    pub file: Utf8PathBuf,

    /// Minimum acceptable score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// How to interpret the record's `content` field.
    #[arg(long, value_enum)]
    pub format: Option<ContentFormat>,
}

/// Score a page record and print the checklist.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    config_format: Option<ContentFormat>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, format = ?args.format, "executing score command");

    check_input_size(&args.file, max_input_bytes)?;
    let input = ScoringInput::from_file(&args.file)
        .with_context(|| format!("failed to load page record {}", args.file))?;

    let format = args.format.or(config_format).unwrap_or_default();
    let min_score = args.min_score.or(config_min_score);
    let result = score_content_as(&input, format);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&args.file, &result);
    }

    if let Some(min) = min_score
        && !result.meets(min)
    {
        bail!(
            "{} scores {}/{} (min: {}). Work through the failed checks above.",
            args.file,
            result.score,
            result.max_score(),
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, result: &ScoreResult) {
    let total = format!("{}/{}", result.score, result.max_score());
    println!(
        "{} {} ({} of {} checks passed)",
        file.bold(),
        total.bold(),
        result.passed_count(),
        result.checks.len(),
    );
    for check in &result.checks {
        print_check(check);
    }
    let readability = &result.readability;
    println!(
        "{}: {} ({}, {})",
        "Readability".dimmed(),
        readability.score,
        readability.grade,
        readability.label,
    );
}

fn print_check(check: &CheckResult) {
    let points = format!("{:>2}/{:<2}", check.points, check.max_points);
    match check.status() {
        CheckStatus::Pass => println!(
            "  {} {} {}: {}",
            "PASS".green(),
            points,
            check.label,
            check.message.dimmed()
        ),
        CheckStatus::Partial => println!(
            "  {} {} {}: {}",
            "PART".yellow(),
            points,
            check.label,
            check.message
        ),
        CheckStatus::Fail => println!(
            "  {} {} {}: {}",
            "FAIL".red(),
            points,
            check.label,
            check.message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("page.toml")).unwrap();
        std::fs::write(&path, body).unwrap();
        (tmp, path)
    }

    fn args(file: Utf8PathBuf, min_score: Option<u8>) -> ScoreArgs {
        ScoreArgs {
            file,
            min_score,
            format: None,
        }
    }

    #[test]
    fn passes_without_threshold() {
        let (_tmp, path) = record("title = \"Pizza\"\nfocus_keyword = \"pizza\"\n");
        assert!(cmd_score(args(path, None), false, None, None, None).is_ok());
    }

    #[test]
    fn fails_below_flag_threshold() {
        let (_tmp, path) = record("title = \"Pizza\"\nfocus_keyword = \"pizza\"\n");
        let err = cmd_score(args(path, Some(50)), true, None, None, None).unwrap_err();
        assert!(err.to_string().contains("scores 10/100"));
    }

    #[test]
    fn config_threshold_applies_when_flag_absent() {
        let (_tmp, path) = record("title = \"Pizza\"\n");
        assert!(cmd_score(args(path, None), true, Some(1), None, None).is_err());
    }

    #[test]
    fn rejects_oversized_record() {
        let (_tmp, path) = record("title = \"Pizza\"\n");
        let err = cmd_score(args(path, None), false, None, None, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }
}
