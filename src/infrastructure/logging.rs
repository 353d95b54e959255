use super::errors::InfraResult;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "snackswipe.log";

/// Installs the global subscriber, appending to `path`.
///
/// The terminal UI owns stdout, so logs never go to the console. The filter
/// comes from `RUST_LOG` and defaults to `snackswipe=info`.
pub fn init_logging(path: &Path) -> InfraResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "snackswipe=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
