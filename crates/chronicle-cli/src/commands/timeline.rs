//! Timeline command implementation.

use super::load_input;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::Pipeline;

/// Execute the timeline command.
pub async fn execute_timeline(
    args: InputArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let input = load_input(&args, config)?;
    let pipeline = Pipeline::from_config(&config.analysis)?;

    let processed = pipeline.process(input.articles)?;
    let (_, timeline) = pipeline.timeline(&processed, &input.query).await;
    println!("{}", formatter.format_timeline(&timeline)?);

    Ok(())
}
