//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronicle CLI - Build event timelines from news articles.
#[derive(Debug, Parser)]
#[command(name = "chronicle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never call an LLM; use the fallback summarizer
    #[arg(long, global = true)]
    pub offline: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CHRONICLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Plain text, one line per event
    Text,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline and print the report
    Analyze(InputArgs),

    /// Print only the consolidated timeline
    Timeline(InputArgs),

    /// Print credibility scores for each article
    Score(InputArgs),

    /// Print the cache key for a query
    CacheKey {
        /// Query text
        query: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Where a command reads its articles from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// JSON file holding an array of article records
    pub file: Option<PathBuf>,

    /// Topic the articles cover; reads the cache entry when no file is given
    #[arg(short, long)]
    pub query: Option<String>,

    /// Store the articles read from FILE in the cache under the query
    #[arg(long, requires = "file")]
    pub save: bool,

    /// Read at most this many articles
    #[arg(short = 'n', long)]
    pub max_articles: Option<usize>,
}

impl InputArgs {
    /// Query used for prompting and caching.
    ///
    /// Without `--query`, a file's stem stands in.
    pub fn query_text(&self) -> Option<String> {
        self.query.clone().or_else(|| {
            self.file
                .as_ref()
                .and_then(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().replace('_', " "))
        })
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Text => crate::config::OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["chronicle", "analyze", "articles.json", "-q", "mars landing"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file, Some(PathBuf::from("articles.json")));
                assert_eq!(args.query.as_deref(), Some("mars landing"));
                assert!(!args.save);
            }
            other => panic!("Expected Analyze command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chronicle", "score", "in.json", "--format", "json", "--offline"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.offline);
        assert!(matches!(cli.command, Command::Score(_)));
    }

    #[test]
    fn test_cache_key_command() {
        let cli = Cli::parse_from(["chronicle", "cache-key", "Artemis II"]);
        assert!(matches!(cli.command, Command::CacheKey { ref query } if query == "Artemis II"));
    }

    #[test]
    fn test_save_requires_file() {
        assert!(Cli::try_parse_from(["chronicle", "analyze", "-q", "x", "--save"]).is_err());
    }

    #[test]
    fn test_query_from_file_stem() {
        let args = InputArgs {
            file: Some(PathBuf::from("/tmp/artemis_launch.json")),
            query: None,
            save: false,
            max_articles: None,
        };
        assert_eq!(args.query_text().as_deref(), Some("artemis launch"));
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Text.into();
        assert_eq!(format, OutputFormat::Text);
    }
}
