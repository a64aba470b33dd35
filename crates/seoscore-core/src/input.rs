//! Page records: the six fields an editor supplies for scoring.
//!
//! Records can be built in code, parsed from JSON, or loaded from a TOML,
//! YAML or JSON file. Every field is optional on the wire and defaults to an
//! empty string, which the checklist treats as a failed (not erroneous) input.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};

/// Caller-supplied page fields to score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringInput {
    /// Page or post title.
    pub title: String,
    /// URL slug, lowercase-hyphenated by convention.
    pub slug: String,
    /// Contents of the `<title>` tag.
    #[serde(alias = "meta_title")]
    pub meta_title: String,
    /// Contents of the description meta tag.
    #[serde(alias = "meta_description")]
    pub meta_description: String,
    /// Body copy as HTML.
    pub content: String,
    /// Search phrase the page should rank for; may be empty.
    #[serde(alias = "focus_keyword")]
    pub focus_keyword: String,
}

impl ScoringInput {
    /// Combined UTF-8 length of every field, for input size limits.
    pub fn byte_len(&self) -> usize {
        [
            &self.title,
            &self.slug,
            &self.meta_title,
            &self.meta_description,
            &self.content,
            &self.focus_keyword,
        ]
        .iter()
        .map(|field| field.len())
        .sum()
    }

    /// Load a page record, detecting the format from the file extension.
    ///
    /// Unknown extensions are read as TOML.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_file(path: &Utf8Path) -> InputResult<Self> {
        let figment = match path.extension() {
            Some("yaml" | "yml") => Figment::from(Yaml::file_exact(path.as_str())),
            Some("json") => Figment::from(Json::file_exact(path.as_str())),
            _ => Figment::from(Toml::file_exact(path.as_str())),
        };
        let input: Self = figment.extract().map_err(|e| InputError::Deserialize {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        tracing::debug!(
            content_len = input.content.len(),
            keyword_set = !input.focus_keyword.trim().is_empty(),
            "loaded page record"
        );
        Ok(input)
    }

    /// Parse a page record from a JSON string.
    pub fn from_json_str(json: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
