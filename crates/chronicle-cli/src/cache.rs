//! On-disk article cache, one JSON array per query.

use crate::error::Result;
use chronicle_domain::Article;
use chronicle_extractor::parse_articles;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Normalize a query into a cache file stem.
///
/// Lowercases, turns spaces into underscores, and strips quotes.
///
/// # Examples
///
/// ```
/// use chronicle_cli::cache_key;
///
/// assert_eq!(cache_key("Mars Rover 'Landing'"), "mars_rover_landing");
/// ```
pub fn cache_key(query: &str) -> String {
    query
        .to_lowercase()
        .replace(' ', "_")
        .replace(['\'', '"'], "")
}

/// Article cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct ArticleCache {
    dir: PathBuf,
}

impl ArticleCache {
    /// Create a cache rooted at `dir`; the directory is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the cache files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `query`.
    pub fn path_for(&self, query: &str) -> PathBuf {
        self.dir.join(format!("{}.json", cache_key(query)))
    }

    /// Cached articles for `query`, or `None` when nothing is stored.
    pub fn load(&self, query: &str) -> Result<Option<Vec<Article>>> {
        let path = self.path_for(query);
        if !path.exists() {
            debug!("Cache miss: {}", path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let articles = parse_articles(&contents)?;
        debug!("Cache hit: {} ({} articles)", path.display(), articles.len());
        Ok(Some(articles))
    }

    /// Store `articles` for `query`, replacing any previous entry.
    pub fn store(&self, query: &str, articles: &[Article]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(query);
        fs::write(&path, serde_json::to_string_pretty(articles)?)?;
        debug!("Cached {} articles at {}", articles.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("Artemis II launch"), "artemis_ii_launch");
        assert_eq!(cache_key("\"quoted\" query"), "quoted_query");
        assert_eq!(cache_key("already_normal"), "already_normal");
        assert_eq!(cache_key(""), "");
    }

    #[test]
    fn test_miss() {
        let dir = tempdir().unwrap();
        let cache = ArticleCache::new(dir.path());
        assert!(cache.load("nothing here").unwrap().is_none());
    }

    #[test]
    fn test_store_then_load() {
        let dir = tempdir().unwrap();
        let cache = ArticleCache::new(dir.path().join("cache"));
        let articles = vec![
            Article::new("Lander launched", "Reuters", "2024-01-10", "The lander lifted off."),
            Article::new("Lander arrives", "", "2024-03-02", "It arrived."),
        ];

        let path = cache.store("Lander Mission", &articles).unwrap();
        assert_eq!(path, dir.path().join("cache").join("lander_mission.json"));

        let loaded = cache.load("lander mission").unwrap().unwrap();
        assert_eq!(loaded, articles);
        assert_eq!(loaded[1].source, "Unknown");
    }

    #[test]
    fn test_cache_file_is_plain_article_array() {
        let dir = tempdir().unwrap();
        let cache = ArticleCache::new(dir.path());
        fs::write(
            cache.path_for("feed"),
            r#"[{"title": "Raw", "source": {"id": null, "name": "BBC News"}, "publishedAt": "2024-05-01T08:00:00Z"}]"#,
        )
        .unwrap();

        let loaded = cache.load("feed").unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].source, "BBC News");
        assert_eq!(loaded[0].published_at, "2024-05-01T08:00:00Z");
    }
}
