//! Cooperative cancellation and progress reporting for long scans.

/// A capability handed to a scan, polled periodically while the scan runs.
///
/// Scans are synchronous; both methods are invoked on the calling thread.
/// A scan observing `is_cancelled() == true` stops early and returns
/// whatever partial mask it has produced so far.
pub trait Progress {
    fn is_cancelled(&self) -> bool;

    /// Reports scan progress as a percentage in `0..=100`.
    fn report_progress(&mut self, percent: u32);
}

/// A progress sink that never cancels and discards progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl Progress for NullProgress {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn report_progress(&mut self, _percent: u32) {}
}
