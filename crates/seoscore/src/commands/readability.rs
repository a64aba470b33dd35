//! Readability command: Flesch Reading Ease scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscore_core::readability::{self, ReadabilityResult};
use seoscore_core::{ContentFormat, Grade};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable readability score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// How to interpret the file. Defaults to text for `.txt` and `.md`.
    #[arg(long, value_enum)]
    pub format: Option<ContentFormat>,
}

impl ReadabilityArgs {
    fn resolved_format(&self, config_format: Option<ContentFormat>) -> ContentFormat {
        self.format
            .or_else(|| match self.file.extension() {
                Some("txt" | "md") => Some(ContentFormat::Text),
                _ => None,
            })
            .or(config_format)
            .unwrap_or_default()
    }
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    config_format: Option<ContentFormat>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, format = ?args.format, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let format = args.resolved_format(config_format);
    let min_score = args.min_score.or(config_min_score);

    let report = readability::check_readability(&content, format);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report, min_score);
    }

    if let Some(min) = min_score
        && report.score < min
    {
        if report.grade == Grade::NotApplicable {
            bail!(
                "{} has too little text to score (need {} words)",
                args.file,
                readability::MIN_WORDS,
            );
        }
        bail!(
            "{} scores {} (min: {}). Use shorter sentences and simpler words.",
            args.file,
            report.score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &ReadabilityResult, min_score: Option<u8>) {
    if report.grade == Grade::NotApplicable {
        println!("{} {}", file, report.label.yellow());
        return;
    }
    match min_score {
        Some(min) if report.score >= min => println!(
            "{} {} scores {} ({}, {}) (min: {})",
            "PASS:".green(),
            file,
            report.score,
            report.grade,
            report.label,
            min,
        ),
        Some(_) => {}
        None => println!("{} ({}, {})", report.score, report.grade, report.label),
    }
    println!(
        "{}: {} words per sentence, {}% complex words",
        "Details".dimmed(),
        report.avg_sentence_length,
        report.complex_word_percentage,
    );
}
