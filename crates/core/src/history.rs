use tracing::{debug, trace};
use vh_check_protocol::Sample;

/// Result of offering a sample to the [`HistoryLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The sample was appended at `index`.
    Appended { index: usize },
    /// The sample matched the last entry and was discarded.
    Duplicate,
}

impl RecordOutcome {
    pub fn is_appended(self) -> bool {
        matches!(self, Self::Appended { .. })
    }
}

/// Append-only, chronologically ordered log of distinct layout states.
///
/// No two adjacent entries share the same four unit values. Entries are
/// never removed or mutated, so the length only grows.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<Sample>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sample` unless it repeats the values of the last entry.
    pub fn record(&mut self, sample: Sample) -> RecordOutcome {
        if let Some(last) = self.entries.last()
            && last.same_values(&sample)
        {
            trace!(timestamp = sample.timestamp, "duplicate sample discarded");
            return RecordOutcome::Duplicate;
        }

        let index = self.entries.len();
        self.entries.push(sample);
        debug!(
            index,
            lvh = sample.lvh,
            dvh = sample.dvh,
            svh = sample.svh,
            vh = sample.vh,
            timestamp = sample.timestamp,
            "sample appended"
        );
        RecordOutcome::Appended { index }
    }

    pub fn entries(&self) -> &[Sample] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
