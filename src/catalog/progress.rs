//! Progress accounting and the sink that receives percentage updates

/// Receives integer percentages in `0..=100`, non-decreasing, from the thread
/// running the build.
pub trait ProgressSink {
    fn on_progress(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn on_progress(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that drops every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _percent: u8) {}
}

/// Processed/total counters for one build.
///
/// Repeated percentages are coalesced: the sink only hears about a value
/// when it differs from the last one delivered.
#[derive(Debug)]
pub struct ProgressTracker {
    total: usize,
    processed: usize,
    last_sent: Option<u8>,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            processed: 0,
            last_sent: None,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    /// `floor(processed / total * 100)`, or `None` for an empty tree.
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let pct = self.processed * 100 / self.total;
        Some(pct.min(100) as u8)
    }

    /// Record one visited file and notify the sink.
    pub fn advance<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) {
        // Files created after the counting pass must not push us past the total.
        self.processed = (self.processed + 1).min(self.total);
        if let Some(pct) = self.percent() {
            self.send(pct, sink);
        }
    }

    /// Make sure a non-empty build ends on 100, even if files disappeared
    /// between the count and the walk.
    pub fn finish<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) {
        if self.total > 0 {
            self.send(100, sink);
        }
    }

    fn send<S: ProgressSink + ?Sized>(&mut self, pct: u8, sink: &mut S) {
        if self.last_sent.is_some_and(|last| last >= pct) {
            return;
        }
        self.last_sent = Some(pct);
        sink.on_progress(pct);
    }
}
