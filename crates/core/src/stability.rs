use serde::{Deserialize, Serialize};
use tracing::debug;
use vh_check_protocol::{Sample, Stability, UnitKind};

use crate::history::HistoryLog;

/// Whether `lvh` / `svh` have ever changed across the recorded history.
///
/// Each flag is a latch: once true it stays true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityFlags {
    pub lvh: bool,
    pub svh: bool,
}

impl StabilityFlags {
    pub fn all_latched(self) -> bool {
        self.lvh && self.svh
    }

    /// Flag for `unit`, or `None` if the unit is not tracked.
    pub fn changed(self, unit: UnitKind) -> Option<bool> {
        match unit {
            UnitKind::Lvh => Some(self.lvh),
            UnitKind::Svh => Some(self.svh),
            UnitKind::Dvh | UnitKind::Vh => None,
        }
    }

    pub fn stability(self, unit: UnitKind) -> Option<Stability> {
        self.changed(unit).map(Stability::from_changed)
    }
}

/// Scan every adjacent pair of `entries` for `lvh` / `svh` changes.
///
/// Starts from `previous` so flags that already latched stay set. Fewer than
/// two entries cannot show a change, and if both flags are already latched
/// there is nothing left to learn, so both cases return `previous` as is.
pub fn evaluate(entries: &[Sample], previous: StabilityFlags) -> StabilityFlags {
    if entries.len() < 2 || previous.all_latched() {
        return previous;
    }

    let mut flags = previous;
    for pair in entries.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        if cur.lvh != next.lvh {
            flags.lvh = true;
        }
        if cur.svh != next.svh {
            flags.svh = true;
        }
    }
    flags
}

/// Holds the latched flags and re-derives them whenever the log grows.
#[derive(Debug, Clone, Default)]
pub struct StabilityEvaluator {
    flags: StabilityFlags,
}

impl StabilityEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> StabilityFlags {
        self.flags
    }

    /// Re-run the full scan over `log`. Called after every append.
    pub fn on_log_appended(&mut self, log: &HistoryLog) -> StabilityFlags {
        let next = evaluate(log.entries(), self.flags);
        if next != self.flags {
            debug!(
                lvh_changed = next.lvh,
                svh_changed = next.svh,
                len = log.len(),
                "stability flag latched"
            );
        }
        self.flags = next;
        next
    }
}
