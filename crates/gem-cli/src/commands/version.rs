use std::error::Error;

use clap::Args;
use serde::Serialize;

use crate::commands::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    source_types: usize,
    labels: Vec<&'static str>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    print_json(&VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        source_types: gem_params::SourceType::ALL.len(),
        labels: gem_params::SourceType::iter()
            .map(gem_params::SourceType::label)
            .collect(),
    })
}
