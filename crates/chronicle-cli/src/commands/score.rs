//! Score command implementation.

use super::load_input;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::Pipeline;
use chronicle_domain::{ChronicleConfig, ProviderKind};

/// Execute the score command.
///
/// Scoring never consults an LLM, so the pipeline is built offline.
pub fn execute_score(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = load_input(&args, config)?;
    let analysis = ChronicleConfig {
        provider: ProviderKind::FallbackOnly,
        ..config.analysis.clone()
    };
    let pipeline = Pipeline::from_config(&analysis)?;

    let processed = pipeline.process(input.articles)?;
    let report = pipeline.score(&processed);
    let titles: Vec<String> = processed.iter().map(|a| a.title().to_string()).collect();
    println!("{}", formatter.format_credibility(&report, &titles)?);

    Ok(())
}
