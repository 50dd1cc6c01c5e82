use std::error::Error;

use clap::Args;
use gem_params::SourceType;
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::{print_json, wants_json};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Source type label, matched exactly (e.g. "Fault Source").
    pub label: String,
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LookupOutput {
    key: &'static str,
    label: SourceType,
}

pub fn run(args: &LookupArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let member = SourceType::lookup(Some(args.label.as_str())).map_err(|err| {
        warn!(label = %args.label, "unknown source type label");
        err
    })?;
    debug!(key = member.key(), "resolved source type");
    if wants_json(args.json, config) {
        print_json(&LookupOutput {
            key: member.key(),
            label: member,
        })
    } else {
        println!("{}\t{}", member.key(), member);
        Ok(())
    }
}
