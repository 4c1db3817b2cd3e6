//! Chronicle Domain Layer
//!
//! This crate contains the data model shared by every stage of the Chronicle
//! pipeline and the trait interfaces that the infrastructure layers implement.
//!
//! ## Key Concepts
//!
//! - **Mention**: one candidate date located in a specific article, with provenance and context
//! - **Analysis Result**: the structured payload produced by the LLM or the fallback summarizer
//! - **Timeline Event**: one consolidated, deduplicated entry of the final timeline
//! - **Milestone**: a timeline event flagged as significant by position or keyword
//! - **Credibility Score**: per-article source and content scoring
//!
//! ## Architecture
//!
//! ```text
//! Articles → Extractor → (LLM | Fallback) → Timeline Consolidator → Timeline
//!                    └──────────────→ Credibility Scorer → Scores
//! ```
//!
//! This crate holds no I/O. Infrastructure implementations live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod article;
pub mod config;
pub mod credibility;
pub mod date;
pub mod error;
pub mod provenance;
pub mod text;
pub mod timeline;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisResult, Discrepancy, TimelineEntry};
pub use article::{Article, ProcessedArticle, UNKNOWN_SOURCE};
pub use config::{ChronicleConfig, LlmBackend, ProviderKind};
pub use credibility::{
    AuthenticityLevel, CredibilityReport, CredibilityScore, SourceScore,
};
pub use date::{parse_iso_date, EventDate, DATE_FORMAT};
pub use error::DomainError;
pub use provenance::{DatedMention, Provenance, PUBLICATION_CONTEXT};
pub use text::truncate_chars;
pub use timeline::{TimelineEvent, TimelineStats, AI_ANALYSIS_SOURCE};
