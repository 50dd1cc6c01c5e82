use std::error::Error;

use clap::Args;
use gem_params::SourceType;
use serde::Serialize;

use crate::commands::{print_json, wants_json};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    index: usize,
    key: &'static str,
    label: SourceType,
}

pub fn run(args: &ListArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let entries: Vec<_> = SourceType::iter()
        .enumerate()
        .map(|(index, member)| ListEntry {
            index,
            key: member.key(),
            label: member,
        })
        .collect();
    if wants_json(args.json, config) {
        return print_json(&entries);
    }
    for entry in &entries {
        println!("{}\t{}\t{}", entry.index, entry.key, entry.label);
    }
    Ok(())
}
