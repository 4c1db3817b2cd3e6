//! Date mentions and where they came from

use crate::date::{parse_iso_date, DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a dated mention was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Derived from the article's publication timestamp
    Metadata,

    /// Extracted from the article body
    Text,
}

impl Provenance {
    /// Lowercase label used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Metadata => "metadata",
            Provenance::Text => "text",
        }
    }
}

/// One candidate date found in an article
///
/// Invariant: `date` is never after the extraction run's reference time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedMention {
    /// Normalized calendar date (no time of day)
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,

    /// Surrounding text snippet
    pub context: Option<String>,

    /// Metadata or body text
    #[serde(rename = "source")]
    pub provenance: Provenance,
}

impl DatedMention {
    /// Create a mention found in the article body
    pub fn text(date: NaiveDate, context: impl Into<String>) -> Self {
        Self {
            date,
            context: Some(context.into()),
            provenance: Provenance::Text,
        }
    }

    /// Create a mention derived from publication metadata
    pub fn metadata(date: NaiveDate) -> Self {
        Self {
            date,
            context: Some(PUBLICATION_CONTEXT.to_string()),
            provenance: Provenance::Metadata,
        }
    }

    /// The `YYYY-MM-DD` key used for deduplication
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Context attached to metadata mentions
pub const PUBLICATION_CONTEXT: &str = "Article publication date";

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Shapes a stored mention may take on the wire
///
/// Both a bare `"YYYY-MM-DD"` string and the structured object are accepted.
/// They are resolved into a single [`DatedMention`] shape at ingestion.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDatedMention {
    Bare(String),
    Structured {
        date: String,
        #[serde(default)]
        context: Option<String>,
        #[serde(default, alias = "provenance")]
        source: Option<Provenance>,
    },
}

impl RawDatedMention {
    fn resolve(self) -> Option<DatedMention> {
        match self {
            RawDatedMention::Bare(date) => Some(DatedMention {
                date: parse_iso_date(&date)?,
                context: None,
                provenance: Provenance::Text,
            }),
            RawDatedMention::Structured {
                date,
                context,
                source,
            } => Some(DatedMention {
                date: parse_iso_date(&date)?,
                context,
                provenance: source.unwrap_or(Provenance::Text),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for DatedMention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawDatedMention::deserialize(deserializer)?
            .resolve()
            .ok_or_else(|| serde::de::Error::custom("mention date is not YYYY-MM-DD"))
    }
}

/// Deserialize a mention list, dropping entries whose date cannot be resolved
pub fn deserialize_mentions<'de, D>(deserializer: D) -> Result<Vec<DatedMention>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<lenient::Lenient<RawDatedMention>> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| entry.0)
        .filter_map(RawDatedMention::resolve)
        .collect())
}

/// Format-agnostic "accept or skip" wrapper for list elements
mod lenient {
    use serde::{Deserialize, Deserializer};

    /// Holds `Some` when the element matched the target shape, `None` otherwise
    pub struct Lenient<T>(pub Option<T>);

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Lenient<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            #[serde(untagged)]
            enum Either<T> {
                Hit(T),
                Miss(serde::de::IgnoredAny),
            }

            Ok(match Either::<T>::deserialize(deserializer)? {
                Either::Hit(value) => Lenient(Some(value)),
                Either::Miss(_) => Lenient(None),
            })
        }
    }
}
