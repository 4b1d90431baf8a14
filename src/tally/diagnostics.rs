const LOG_TARGET: &str = "     tally";

/// A sink for per-file diagnostic lines.
pub trait Diagnostics {
    fn debug(&self, message: &str);
}

/// Forwards diagnostic lines to the `log` facade at debug level.
///
/// Nothing is emitted unless the process has installed a logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn debug(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{message}");
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }
}
