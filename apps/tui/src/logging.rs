use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::{eyre::eyre, Result};
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "issue-digest.log";

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    /// The interactive viewer draws on the terminal stderr shares, so its
    /// events go to a file in the temp directory instead.
    pub fn for_mode(headless: bool) -> Self {
        if headless {
            Self::Stderr
        } else {
            Self::File(std::env::temp_dir().join(LOG_FILE_NAME))
        }
    }
}

/// Installs the global subscriber when `--debug` or `RUST_LOG` asks for logs.
/// Returns the sink that was installed, if any.
pub fn init_tracing(debug: bool, sink: LogSink) -> Result<Option<LogSink>> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return Ok(None);
    };

    let subscriber = build_subscriber(filter, &sink)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))?;
    Ok(Some(sink))
}

fn build_subscriber(filter: EnvFilter, sink: &LogSink) -> io::Result<BoxedSubscriber> {
    let registry = tracing_subscriber::registry().with(filter);
    Ok(match sink {
        LogSink::Stderr => Box::new(registry.with(fmt::layer().with_writer(io::stderr))),
        LogSink::File(path) => {
            let file = File::create(path)?;
            Box::new(
                registry.with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                ),
            )
        }
    })
}
