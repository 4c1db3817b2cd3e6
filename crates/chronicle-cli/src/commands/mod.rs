//! Command implementations.

pub mod analyze;
pub mod cache_key;
pub mod config;
pub mod score;
pub mod timeline;

pub use self::analyze::execute_analyze;
pub use self::cache_key::execute_cache_key;
pub use self::config::execute_config;
pub use self::score::execute_score;
pub use self::timeline::execute_timeline;

use crate::cache::ArticleCache;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use chronicle_domain::Article;
use chronicle_extractor::parse_articles;
use std::fs;
use tracing::info;

/// Articles a command runs over, and the query they belong to.
#[derive(Debug)]
pub struct Input {
    /// Query for prompting; empty when none could be derived
    pub query: String,
    /// Raw article records, capped at the configured maximum
    pub articles: Vec<Article>,
}

/// Read articles from the file argument or the cache entry for `--query`.
pub fn load_input(args: &InputArgs, config: &Config) -> Result<Input> {
    let query = args.query_text();
    let cache = ArticleCache::new(config.cache_dir()?);

    let mut articles = match (&args.file, &query) {
        (Some(path), _) => {
            let contents = fs::read_to_string(path)?;
            let articles = parse_articles(&contents)?;
            info!("Read {} articles from {}", articles.len(), path.display());
            if args.save {
                let query = query.as_deref().ok_or_else(|| {
                    CliError::InvalidInput("--save needs a query".to_string())
                })?;
                let stored = cache.store(query, &articles)?;
                info!("Cached articles at {}", stored.display());
            }
            articles
        }
        (None, Some(query)) => cache
            .load(query)?
            .ok_or_else(|| CliError::CacheMiss(query.clone()))?,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "give an articles file or --query".to_string(),
            ))
        }
    };

    let cap = args.max_articles.unwrap_or(config.settings.max_articles);
    articles.truncate(cap);

    Ok(Input {
        query: query.unwrap_or_default(),
        articles,
    })
}
