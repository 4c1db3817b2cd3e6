//! Article records as supplied by the news collaborator

use crate::provenance::{deserialize_mentions, DatedMention};
use serde::{Deserialize, Deserializer, Serialize};

/// Source label used when an article carries none
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A raw article record
///
/// Every field is optional on the wire. Missing strings default to empty and a
/// missing source defaults to [`UNKNOWN_SOURCE`], so a malformed record is never
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Short description or teaser
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Body content, possibly HTML
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Canonical URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    /// Publisher name
    #[serde(default = "unknown_source", deserialize_with = "source_name")]
    pub source: String,

    /// Publication timestamp, in whatever format the feed used
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,

    /// Byline
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

impl Article {
    /// Create an article with the fields the core actually reads
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        published_at: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let source = source.into();
        Self {
            title: title.into(),
            source: if source.trim().is_empty() {
                unknown_source()
            } else {
                source
            },
            published_at: published_at.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Body text, falling back to the description when content is empty
    pub fn body(&self) -> &str {
        if self.content.is_empty() {
            &self.description
        } else {
            &self.content
        }
    }
}

/// An article after date extraction and content cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedArticle {
    /// The original record
    #[serde(flatten)]
    pub article: Article,

    /// Body with markup and noise removed
    #[serde(default)]
    pub cleaned_content: String,

    /// Title followed by the cleaned content
    #[serde(default)]
    pub full_text: String,

    /// Dates found in this article, ascending
    #[serde(
        default,
        rename = "extracted_dates",
        deserialize_with = "deserialize_mentions"
    )]
    pub mentions: Vec<DatedMention>,
}

impl ProcessedArticle {
    /// Wrap an article that has already been cleaned
    pub fn new(article: Article, cleaned_content: String, mentions: Vec<DatedMention>) -> Self {
        let full_text = format!("{} {}", article.title, cleaned_content);
        Self {
            article,
            cleaned_content,
            full_text,
            mentions,
        }
    }

    /// Headline of the underlying article
    pub fn title(&self) -> &str {
        &self.article.title
    }

    /// Publisher of the underlying article
    pub fn source(&self) -> &str {
        &self.article.source
    }
}

fn unknown_source() -> String {
    UNKNOWN_SOURCE.to_string()
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept either a plain string or a NewsAPI-style `{"id", "name"}` object
fn source_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SourceField {
        Name(String),
        Nested {
            #[serde(default)]
            name: Option<String>,
        },
    }

    let name = match Option::<SourceField>::deserialize(deserializer)? {
        Some(SourceField::Name(name)) => Some(name),
        Some(SourceField::Nested { name }) => name,
        None => None,
    };

    Ok(name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(unknown_source))
}
