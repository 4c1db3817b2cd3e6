//! Chronicle Extractor
//!
//! Turns raw news articles into cleaned text with dated mentions attached.
//!
//! # Overview
//!
//! Each article passes through two steps:
//!
//! 1. **Cleaning**: markup is stripped and whitespace normalized
//! 2. **Date extraction**: the publication timestamp and four classes of
//!    in-text date patterns are parsed into calendar dates
//!
//! ```text
//! Article → clean_content → DateExtractor → ProcessedArticle
//! ```
//!
//! Extraction is lossy by construction: one mention per calendar day survives,
//! the first one found. Dates after the run's reference time are discarded as
//! parse errors. Nothing in this crate fails on a bad date; it yields fewer
//! mentions instead.
//!
//! # Example Usage
//!
//! ```
//! use chronicle_domain::Article;
//! use chronicle_extractor::ArticleProcessor;
//!
//! let article = Article::new(
//!     "Lander lands",
//!     "Reuters",
//!     "2023-08-24T10:00:00Z",
//!     "<p>The lander touched down on August 23, 2023.</p>",
//! );
//!
//! let processed = ArticleProcessor::new().process(article);
//! assert_eq!(processed.mentions.len(), 2);
//! assert_eq!(processed.mentions[0].date_key(), "2023-08-23");
//! ```

#![warn(missing_docs)]

mod clean;
mod error;
mod extractor;
mod parser;
mod patterns;
mod processor;

#[cfg(test)]
mod tests;

pub use clean::clean_content;
pub use error::ExtractorError;
pub use extractor::{DateExtractor, CONTEXT_CHARS};
pub use parser::{parse_date, parse_datetime};
pub use patterns::DatePattern;
pub use processor::{parse_articles, ArticleProcessor};
