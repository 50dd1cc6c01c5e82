pub mod check;
pub mod list;
pub mod lookup;
pub mod validate;
pub mod version;

use std::error::Error;

use gem_params::to_canonical_json_bytes;
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};

pub(crate) fn wants_json(flag: bool, config: &CliConfig) -> bool {
    flag || config.output == OutputFormat::Json
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
