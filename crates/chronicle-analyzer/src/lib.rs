//! Chronicle Analyzer
//!
//! Summarizes a processed article set into an [`AnalysisResult`], preferring
//! an LLM and degrading to a deterministic summarizer.
//!
//! # Architecture
//!
//! ```text
//! ProcessedArticles → PromptBuilder → LlmProvider → parse_analysis_response
//!                                          │ error, timeout, bad or empty JSON
//!                                          └──→ FallbackAnalyzer
//! ```
//!
//! The provider is synchronous; the analyzer runs it on tokio's blocking pool
//! under a timeout so a hung backend cannot stall the pipeline.
//!
//! # Example Usage
//!
//! ```
//! use chronicle_analyzer::{AnalysisSource, Analyzer};
//! use chronicle_domain::{Article, ChronicleConfig, ProcessedArticle};
//! use chronicle_llm::MockProvider;
//!
//! # async fn example() {
//! let articles = vec![ProcessedArticle::new(
//!     Article::new("Rocket launches", "BBC", "2024-01-01", ""),
//!     String::new(),
//!     Vec::new(),
//! )];
//!
//! let analyzer = Analyzer::new(Some(MockProvider::failing()), &ChronicleConfig::default());
//! let outcome = analyzer.analyze(&articles, "rocket launch").await;
//! assert_eq!(outcome.source, AnalysisSource::Fallback);
//! # }
//! ```
//!
//! [`AnalysisResult`]: chronicle_domain::AnalysisResult

#![warn(missing_docs)]

mod analyzer;
mod error;
mod fallback;
mod parser;
mod prompt;

pub use analyzer::{AnalysisOutcome, AnalysisSource, Analyzer};
pub use error::AnalyzerError;
pub use fallback::{FallbackAnalyzer, FALLBACK_SAMPLE, FALLBACK_TITLE_CHARS};
pub use parser::parse_analysis_response;
pub use prompt::{ArticleDigest, PromptBuilder, ANALYSIS_SCHEMA};
