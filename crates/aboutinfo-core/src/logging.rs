//! Tracing setup for the `aboutinfo` binary.
//!
//! Events go to `aboutinfo.log` in the XDG state directory. `RUST_LOG`
//! overrides the default filter.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,aboutinfo=debug,aboutinfo_core=debug";
const LOG_FILE: &str = "aboutinfo.log";

/// One event's output: the shared log file, or stderr if the handle
/// could not be duplicated for this event.
enum EventWriter {
    Log(File),
    Stderr,
}

impl Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventWriter::Log(f) => f.write(buf),
            EventWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventWriter::Log(f) => f.flush(),
            EventWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventWriter::Log(f),
            Err(_) => EventWriter::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/aboutinfo/aboutinfo.log`, creating the directory.
fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("aboutinfo")?;
    let dir = dirs.get_state_home();
    fs::create_dir_all(&dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    Ok(dir.join(LOG_FILE))
}

/// Send tracing output to the state-dir log file.
/// Errors leave no subscriber installed; callers fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install subscriber: {e}"))?;

    tracing::info!(log = %path.display(), "logging to file");
    Ok(())
}

/// Send tracing output to stderr. Does nothing if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
