//! End-to-end run: process, analyze, consolidate, score.

use crate::error::{CliError, Result};
use chronicle_analyzer::{AnalysisOutcome, AnalysisSource, Analyzer};
use chronicle_credibility::CredibilityScorer;
use chronicle_domain::traits::LlmProvider;
use chronicle_domain::{
    AnalysisResult, Article, ChronicleConfig, CredibilityReport, ProcessedArticle, TimelineEvent,
    TimelineStats,
};
use chronicle_extractor::ArticleProcessor;
use chronicle_llm::BackendProvider;
use chronicle_timeline::{format_for_display, timeline_stats, TimelineConsolidator};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

/// Everything one run produces, in export shape.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// The query the articles were gathered for
    pub query: String,
    /// Articles that went into the run
    pub article_count: usize,
    /// LLM or fallback analysis
    pub analysis: AnalysisResult,
    /// Which path produced `analysis`
    pub analysis_source: AnalysisSource,
    /// Consolidated timeline
    pub timeline: Vec<TimelineEvent>,
    /// Timeline summary figures
    pub stats: TimelineStats,
    /// Per-article and per-source credibility
    pub credibility: CredibilityReport,
    /// Line-per-event rendering of `timeline`
    pub text: String,
}

/// Wires the pipeline stages around one configuration.
///
/// # Examples
///
/// ```
/// use chronicle_cli::Pipeline;
/// use chronicle_domain::{Article, ChronicleConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pipeline = Pipeline::from_config(&ChronicleConfig::offline()).unwrap();
/// let articles = vec![Article::new("Rocket launches successfully", "BBC", "2024-01-01", "")];
///
/// let report = pipeline.run("rocket", articles).await.unwrap();
/// assert_eq!(report.timeline.len(), 1);
/// assert!(report.timeline[0].is_milestone);
/// # }
/// ```
pub struct Pipeline<L> {
    processor: ArticleProcessor,
    analyzer: Analyzer<L>,
    consolidator: TimelineConsolidator,
    scorer: CredibilityScorer,
}

impl Pipeline<BackendProvider> {
    /// Build a pipeline with the backend the configuration names.
    ///
    /// A backend that cannot be constructed, such as an OpenAI backend without
    /// a key, leaves the pipeline on the fallback path.
    pub fn from_config(config: &ChronicleConfig) -> Result<Self> {
        config.validate()?;
        let provider = match BackendProvider::from_config(config) {
            Ok(provider) => provider,
            Err(e) => {
                warn!("LLM backend unavailable, analysis will use the fallback: {}", e);
                None
            }
        };
        Ok(Self::new(provider, config))
    }
}

impl<L> Pipeline<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: fmt::Display,
{
    /// Build a pipeline around an explicit provider.
    pub fn new(provider: Option<L>, config: &ChronicleConfig) -> Self {
        Self {
            processor: ArticleProcessor::new(),
            analyzer: Analyzer::new(provider, config),
            consolidator: TimelineConsolidator::new(config),
            scorer: CredibilityScorer::new(config),
        }
    }

    /// Replace the article processor, e.g. to pin the extraction time.
    pub fn with_processor(mut self, processor: ArticleProcessor) -> Self {
        self.processor = processor;
        self
    }

    /// Clean articles and extract their dates.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoArticles`] for an empty batch.
    pub fn process(&self, articles: Vec<Article>) -> Result<Vec<ProcessedArticle>> {
        if articles.is_empty() {
            return Err(CliError::NoArticles);
        }
        Ok(self.processor.process_all(articles))
    }

    /// Analyze processed articles and consolidate the timeline.
    pub async fn timeline(
        &self,
        processed: &[ProcessedArticle],
        query: &str,
    ) -> (AnalysisOutcome, Vec<TimelineEvent>) {
        let outcome = self.analyzer.analyze(processed, query).await;
        let timeline = self.consolidator.generate_timeline(&outcome.result, processed);
        (outcome, timeline)
    }

    /// Credibility for processed articles.
    pub fn score(&self, processed: &[ProcessedArticle]) -> CredibilityReport {
        self.scorer.score_all(processed)
    }

    /// Run every stage over `articles`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoArticles`] when `articles` is empty. Every other
    /// failure degrades inside the stages.
    pub async fn run(&self, query: &str, articles: Vec<Article>) -> Result<Report> {
        let processed = self.process(articles)?;
        let (outcome, timeline) = self.timeline(&processed, query).await;
        let credibility = self.score(&processed);
        let stats = timeline_stats(&timeline);

        info!(
            "Run for '{}': {} articles, {} events via {}",
            query,
            processed.len(),
            timeline.len(),
            outcome.source
        );

        Ok(Report {
            query: query.to_string(),
            article_count: processed.len(),
            analysis: outcome.result,
            analysis_source: outcome.source,
            text: format_for_display(&timeline),
            timeline,
            stats,
            credibility,
        })
    }
}
