//! Core library for seoscore.
//!
//! Scores a web page against an eleven-rule SEO checklist and computes a
//! Flesch reading-ease score for its body copy. Everything here is pure and
//! synchronous; the `seoscore` CLI and MCP server are thin layers on top.
//!
//! # Modules
//!
//! - [`seo`] - The weighted checklist and [`score_content`]
//! - [`readability`] - Flesch reading ease and syllable estimation
//! - [`html`] - HTML-to-plain-text conversion
//! - [`text`] - Word and sentence counting
//! - [`input`] - The page record ([`ScoringInput`]) and file loading
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seoscore_core::{ScoringInput, score_content};
//!
//! let input = ScoringInput {
//!     title: "Best Pizza in Rome".to_string(),
//!     focus_keyword: "pizza".to_string(),
//!     ..ScoringInput::default()
//! };
//! let result = score_content(&input);
//! assert_eq!(result.score, 10);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod html;
pub mod input;
pub mod readability;
pub mod seo;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use html::{ContentFormat, to_plain_text};
pub use input::ScoringInput;
pub use readability::{Grade, ReadabilityResult, check_readability};
pub use seo::{CheckId, CheckResult, CheckStatus, ScoreResult, score_content, score_content_as};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
