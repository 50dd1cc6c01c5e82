use std::error::Error;

use clap::Args;
use gem_params::SourceType;
use serde::Serialize;
use tracing::info;

use crate::commands::{print_json, wants_json};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Labels to test for membership.
    #[arg(required = true)]
    pub labels: Vec<String>,
    /// Fail when any label is not a source type.
    #[arg(long)]
    pub strict: bool,
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    label: &'a str,
    valid: bool,
}

pub fn run(args: &CheckArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let results: Vec<_> = args
        .labels
        .iter()
        .map(|label| CheckResult {
            label: label.as_str(),
            valid: SourceType::is_valid(label),
        })
        .collect();
    if wants_json(args.json, config) {
        print_json(&results)?;
    } else {
        for result in &results {
            println!("{}\t{}", result.label, result.valid);
        }
    }
    let invalid = results.iter().filter(|result| !result.valid).count();
    info!(checked = results.len(), invalid, "checked labels");
    if invalid > 0 && (args.strict || config.strict) {
        return Err(format!("{invalid} label(s) are not GEM source types").into());
    }
    Ok(())
}
