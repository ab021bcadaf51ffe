use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

pub mod engine;
pub mod input;

pub use input::Chunk;

const LOG_FILE: &str = "mr.log";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A MapReduce application run by [`engine::run`].
///
/// `map` is called once per chunk, possibly from many threads at once, and
/// must not depend on any other chunk. `reduce` is called once per distinct
/// intermediate key with every value emitted under that key, in no
/// particular order.
pub trait App: Send + Sync {
    fn name(&self) -> &str;

    fn map(&self, source: &str, contents: &str) -> Vec<KeyValue>;

    fn reduce(&self, key: &str, values: Vec<String>) -> anyhow::Result<KeyValue>;

    /// Keys that are reduced even if no map call emitted them.
    fn required_keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. When `log_dir` is
/// given, events go to `<log_dir>/mr.log` instead of stderr; the returned
/// guard must be held until exit so buffered lines are flushed.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = LocalTime::new(time::macros::format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_thread_ids(true);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
            Ok(None)
        }
    }
}
