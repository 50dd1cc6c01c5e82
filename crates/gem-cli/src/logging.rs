use std::io::IsTerminal;

use gem_core::errors::{ErrorInfo, GemError};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: flag, then `RUST_LOG`, then config, then `warn`.
pub fn filter_directive(flag: Option<&str>, env: Option<&str>, config: &CliConfig) -> String {
    let present = |value: &&str| !value.trim().is_empty();
    flag.filter(present)
        .or(env.filter(present))
        .or(config.log_level.as_deref())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs the global stderr subscriber.
pub fn init(flag: Option<&str>, config: &CliConfig) -> Result<(), GemError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(flag, env.as_deref(), config);
    let filter = EnvFilter::try_new(&directive).map_err(|err| {
        GemError::Config(
            ErrorInfo::new("gemctl.log_filter", err.to_string()).with_context("filter", directive),
        )
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| GemError::Config(ErrorInfo::new("gemctl.log_init", err.to_string())))
}
