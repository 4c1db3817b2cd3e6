//! Cache-key command implementation.

use crate::cache::{cache_key, ArticleCache};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the cache-key command.
pub fn execute_cache_key(query: &str, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", cache_key(query));

    let cache = ArticleCache::new(config.cache_dir()?);
    let path = cache.path_for(query);
    if path.exists() {
        eprintln!("{}", formatter.info(&format!("Cached at {}", path.display())));
    }

    Ok(())
}
