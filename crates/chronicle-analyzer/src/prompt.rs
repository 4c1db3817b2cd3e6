//! Prompt construction for LLM event analysis

use chronicle_domain::{truncate_chars, ProcessedArticle};

/// Content characters kept per article digest
pub const DIGEST_CONTENT_CHARS: usize = 2000;

/// Content characters rendered into the prompt
pub const PROMPT_CONTENT_CHARS: usize = 1500;

/// Extracted dates listed per article
pub const PROMPT_DATES: usize = 5;

/// The slice of an article the model gets to see
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDigest {
    /// 1-based position in the article set
    pub index: usize,
    /// Headline
    pub title: String,
    /// Publisher
    pub source: String,
    /// Raw publication timestamp
    pub published_at: String,
    /// Cleaned content, truncated
    pub content: String,
    /// Extracted dates as `YYYY-MM-DD`
    pub dates: Vec<String>,
}

impl ArticleDigest {
    fn from_article(index: usize, article: &ProcessedArticle) -> Self {
        Self {
            index,
            title: article.title().to_string(),
            source: article.source().to_string(),
            published_at: article.article.published_at.clone(),
            content: truncate_chars(&article.cleaned_content, DIGEST_CONTENT_CHARS).to_string(),
            dates: article.mentions.iter().map(|m| m.date_key()).collect(),
        }
    }

    fn render(&self) -> String {
        let dates: Vec<&str> = self
            .dates
            .iter()
            .take(PROMPT_DATES)
            .map(String::as_str)
            .collect();
        format!(
            "Article {} ({}, {}):\nTitle: {}\nContent: {}\nDates mentioned: {}",
            self.index,
            self.source,
            self.published_at,
            self.title,
            truncate_chars(&self.content, PROMPT_CONTENT_CHARS),
            dates.join(", ")
        )
    }
}

/// Builds the analysis prompt for one query and article set
pub struct PromptBuilder {
    query: String,
    digests: Vec<ArticleDigest>,
}

impl PromptBuilder {
    /// Create a builder over at most `max_articles` articles, in input order
    pub fn new(query: impl Into<String>, articles: &[ProcessedArticle], max_articles: usize) -> Self {
        let digests = articles
            .iter()
            .take(max_articles)
            .enumerate()
            .map(|(idx, article)| ArticleDigest::from_article(idx + 1, article))
            .collect();
        Self {
            query: query.into(),
            digests,
        }
    }

    /// Digests that will be rendered
    pub fn digests(&self) -> &[ArticleDigest] {
        &self.digests
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let articles_text = self
            .digests
            .iter()
            .map(ArticleDigest::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut prompt = String::new();
        prompt.push_str(&format!(
            "You are an AI news analyst. Analyze the following news articles about \"{}\" \
             and provide a comprehensive timeline and summary.\n\n",
            self.query
        ));
        prompt.push_str("Articles:\n");
        prompt.push_str(&articles_text);
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str("\n\n");
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt
    }
}

/// JSON shape requested from the model, passed as the structured-output schema
pub const ANALYSIS_SCHEMA: &str = r#"{
    "timeline": [
        {"date": "YYYY-MM-DD", "event": "Description of what happened on this date"}
    ],
    "summary": "A comprehensive 2-3 paragraph summary of the entire event",
    "key_highlights": ["Key fact or milestone"],
    "discrepancies": [
        {
            "issue": "Clear description of the conflict",
            "sources": ["Source 1", "Source 2"],
            "details": "What Source 1 says vs what Source 2 says"
        }
    ],
    "verified_facts": ["Fact that appears consistently across sources"]
}"#;

const OUTPUT_FORMAT: &str = r#"Please provide a JSON response with the following structure:
{
    "timeline": [
        {"date": "YYYY-MM-DD", "event": "Description of what happened on this date"},
        ...
    ],
    "summary": "A comprehensive 2-3 paragraph summary of the entire event",
    "key_highlights": [
        "Key fact or milestone 1",
        ...
    ],
    "discrepancies": [
        {
            "issue": "Clear description of the conflict (e.g., 'Launch delayed' vs 'Launch on time')",
            "sources": ["Source 1", "Source 2"],
            "details": "What Source 1 says vs what Source 2 says"
        },
        ...
    ],
    "verified_facts": [
        "Fact that appears consistently across sources",
        ...
    ]
}"#;

const ANALYSIS_INSTRUCTIONS: &str = r#"Instructions for discrepancies:
- Compare articles side-by-side for conflicting information
- Look for contradictions in dates, outcomes, numbers, statements and claims
- For each discrepancy, state the conflict and which sources disagree
- If no significant conflicts exist, return an empty discrepancies array

Important:
- Order timeline events chronologically by date
- Use only dates that appear in the articles; never invent dates
- Identify major turning points and milestones
- Focus on verified facts that appear in multiple sources

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chronicle_domain::{Article, DatedMention};

    fn article(title: &str, content: &str, days: &[u32]) -> ProcessedArticle {
        let mentions = days
            .iter()
            .map(|d| DatedMention::text(NaiveDate::from_ymd_opt(2024, 1, *d).unwrap(), ""))
            .collect();
        ProcessedArticle::new(
            Article::new(title, "Reuters", "2024-01-31", content),
            content.to_string(),
            mentions,
        )
    }

    #[test]
    fn test_prompt_includes_query_and_articles() {
        let articles = vec![article("Lander lands", "It landed.", &[5])];
        let prompt = PromptBuilder::new("moon lander", &articles, 10).build();
        assert!(prompt.contains("about \"moon lander\""));
        assert!(prompt.contains("Article 1 (Reuters, 2024-01-31):"));
        assert!(prompt.contains("Title: Lander lands"));
        assert!(prompt.contains("Dates mentioned: 2024-01-05"));
        assert!(prompt.contains("\"verified_facts\""));
    }

    #[test]
    fn test_limits_article_count() {
        let articles: Vec<_> = (0..15)
            .map(|i| article(&format!("headline-{}", i), "", &[]))
            .collect();
        let builder = PromptBuilder::new("q", &articles, 10);
        assert_eq!(builder.digests().len(), 10);
        let prompt = builder.build();
        assert!(prompt.contains("headline-9"));
        assert!(!prompt.contains("headline-10"));
    }

    #[test]
    fn test_truncates_content_and_dates() {
        let long = "z".repeat(3000);
        let articles = vec![article("t", &long, &[1, 2, 3, 4, 5, 6, 7])];
        let builder = PromptBuilder::new("q", &articles, 10);
        assert_eq!(builder.digests()[0].content.len(), DIGEST_CONTENT_CHARS);

        let prompt = builder.build();
        assert!(prompt.contains(&"z".repeat(PROMPT_CONTENT_CHARS)));
        assert!(!prompt.contains(&"z".repeat(PROMPT_CONTENT_CHARS + 1)));
        assert!(prompt.contains("2024-01-05"));
        assert!(!prompt.contains("2024-01-06"));
    }
}
