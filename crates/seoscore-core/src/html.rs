//! HTML-to-text normalization.
//!
//! Uses scraper (html5ever) for an inert parse rather than regex stripping.
//! Nothing is executed, malformed markup is repaired the way a browser would
//! repair it, and entities are decoded in the text nodes we collect.

use schemars::JsonSchema;
use scraper::Html;
use serde::{Deserialize, Serialize};

/// How a page's `content` field should be interpreted before analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ContentFormat {
    /// Rich content from an editor; tags are stripped before analysis.
    #[default]
    Html,
    /// Already plain prose; used verbatim.
    Text,
}

impl ContentFormat {
    /// Returns the format name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip markup from an HTML fragment, returning its text content.
///
/// Every text node is concatenated in document order, so the result matches
/// what a browser's `textContent` accessor would return: tags and attributes
/// disappear, entities such as `&amp;` are decoded, and whitespace is left
/// as-is for downstream word splitting.
#[tracing::instrument(skip_all, fields(input_len = html.len()))]
pub fn to_plain_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    tracing::trace!(output_len = text.len(), "stripped markup");
    text
}

/// Normalize `content` according to its declared format.
pub fn normalize(content: &str, format: ContentFormat) -> String {
    match format {
        ContentFormat::Html => to_plain_text(content),
        ContentFormat::Text => content.to_string(),
    }
}
