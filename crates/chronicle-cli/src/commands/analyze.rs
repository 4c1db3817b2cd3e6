//! Analyze command implementation.

use super::load_input;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::Pipeline;

/// Execute the analyze command.
pub async fn execute_analyze(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = load_input(&args, config)?;
    let pipeline = Pipeline::from_config(&config.analysis)?;

    let report = pipeline.run(&input.query, input.articles).await?;
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}
