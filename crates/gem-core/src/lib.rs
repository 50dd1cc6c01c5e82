#![deny(missing_docs)]
#![doc = "Core error types shared by the GEM parameter crates."]

pub mod errors;

pub use errors::{ErrorInfo, GemError};
