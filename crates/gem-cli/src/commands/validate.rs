use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gem_params::{compute_catalog_hash, load_catalog, CatalogReport};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::{print_json, wants_json};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file (.toml, .yaml, .yml or .json).
    pub catalog: PathBuf,
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidateOutput {
    path: String,
    catalog_hash: String,
    report: CatalogReport,
}

pub fn run(args: &ValidateArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(&args.catalog)?;
    info!(
        path = %args.catalog.display(),
        name = %catalog.name,
        sources = catalog.sources.len(),
        "loaded catalog"
    );
    let output = ValidateOutput {
        path: args.catalog.display().to_string(),
        catalog_hash: compute_catalog_hash(&catalog)?,
        report: catalog.validate(),
    };
    for issue in &output.report.issues {
        warn!(entry = issue.entry, id = %issue.id, kind = ?issue.kind, "{}", issue.detail);
    }

    if wants_json(args.json, config) {
        print_json(&output)?;
    } else {
        println!("catalog\t{}", output.report.catalog);
        println!("hash\t{}", output.catalog_hash);
        println!("entries\t{}", output.report.entries);
        for (member, count) in output.report.counts() {
            println!("{member}\t{count}");
        }
        for issue in &output.report.issues {
            println!("issue\t{}\t{}\t{}", issue.entry, issue.id, issue.detail);
        }
    }

    if !output.report.is_clean() {
        return Err(format!(
            "catalog has {} issue(s)",
            output.report.issues.len()
        )
        .into());
    }
    Ok(())
}
