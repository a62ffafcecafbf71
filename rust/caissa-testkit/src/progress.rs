//! Progress sinks with scripted behavior.

use caissa_store::Progress;

/// Cancels after a fixed number of progress reports have been observed.
#[derive(Debug, Clone)]
pub struct CancelAfter {
    remaining: u32,
}

impl CancelAfter {
    pub fn new(reports: u32) -> CancelAfter {
        CancelAfter { remaining: reports }
    }
}

impl Progress for CancelAfter {
    fn is_cancelled(&self) -> bool {
        self.remaining == 0
    }

    fn report_progress(&mut self, _percent: u32) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// Records every reported percentage, never cancelling.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    pub percents: Vec<u32>,
}

impl Progress for RecordingProgress {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn report_progress(&mut self, percent: u32) {
        self.percents.push(percent);
    }
}
