use crate::error::CliError;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout carries only query output.
pub fn init(filter: &str) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| CliError::LogFilter {
        filter: filter.to_string(),
        reason: err.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    Ok(())
}
