//! Failure reporting sink for non-fatal about-file problems.

use std::error::Error;
use std::fmt::Write as _;

/// Receives one report per failure: a message plus the underlying cause.
pub trait FailureSink {
    fn report(&self, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Default sink: one `warn!` event per report, with the full cause chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn report(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match cause {
            Some(cause) => tracing::warn!(cause = %cause_chain(cause), "{message}"),
            None => tracing::warn!("{message}"),
        }
    }
}

/// `outer: inner: innermost`.
pub fn cause_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut next = err.source();
    while let Some(e) = next {
        let _ = write!(out, ": {e}");
        next = e.source();
    }
    out
}

/// Report `err` with its source as the cause.
pub(crate) fn report_error(sink: &dyn FailureSink, err: &(dyn Error + 'static)) {
    sink.report(&err.to_string(), err.source());
}
