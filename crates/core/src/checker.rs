use tracing::{debug, warn};
use vh_check_protocol::{CheckerView, Sample, UnitKind, UnitReading};

use crate::history::{HistoryLog, RecordOutcome};
use crate::sampler::{Clock, Sampler, UnitProbe};
use crate::stability::{StabilityEvaluator, StabilityFlags};

/// Host notifications that may change viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    /// The checker was just installed.
    Mount,
    /// `DOMContentLoaded`. Fires at most once.
    ContentLoaded,
    /// `window` resize.
    Resize,
    /// `visualViewport` resize (toolbar show/hide).
    VisualViewportResize,
}

type Subscriber = Box<dyn FnMut(&CheckerView)>;

/// Owns the history log and stability flags for one page session.
///
/// All mutation goes through [`Checker::handle`] or [`Checker::record`].
/// Subscribers are called with a fresh [`CheckerView`] after every append.
pub struct Checker<P, C> {
    sampler: Sampler<P, C>,
    history: HistoryLog,
    evaluator: StabilityEvaluator,
    subscribers: Vec<Subscriber>,
}

impl<P: UnitProbe, C: Clock> Checker<P, C> {
    pub fn new(sampler: Sampler<P, C>) -> Self {
        Self {
            sampler,
            history: HistoryLog::new(),
            evaluator: StabilityEvaluator::new(),
            subscribers: Vec::new(),
        }
    }

    /// Take one sample in response to `event` and record it.
    ///
    /// A sample with a non-numeric measurement is logged and dropped; the
    /// log is left untouched and `None` is returned.
    pub fn handle(&mut self, event: LayoutEvent) -> Option<RecordOutcome> {
        match self.sampler.sample() {
            Ok(sample) => {
                debug!(?event, "sampled viewport units");
                Some(self.record(sample))
            }
            Err(e) => {
                warn!(?event, error = %e, "skipping sample");
                None
            }
        }
    }

    /// Offer `sample` to the history log, re-evaluating stability and
    /// notifying subscribers if it was appended.
    pub fn record(&mut self, sample: Sample) -> RecordOutcome {
        let outcome = self.history.record(sample);
        if outcome.is_appended() {
            self.on_log_appended();
        }
        outcome
    }

    /// Register a callback invoked after every append.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CheckerView) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn on_log_appended(&mut self) {
        self.evaluator.on_log_appended(&self.history);
        if self.subscribers.is_empty() {
            return;
        }
        let view = self.view();
        for subscriber in &mut self.subscribers {
            subscriber(&view);
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn flags(&self) -> StabilityFlags {
        self.evaluator.flags()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.history.latest()
    }

    /// Snapshot of the latest values, stability and full history.
    pub fn view(&self) -> CheckerView {
        build_view(&self.history, self.flags())
    }
}

/// Build the presentation snapshot for `history` under `flags`.
pub fn build_view(history: &HistoryLog, flags: StabilityFlags) -> CheckerView {
    let latest = history.latest();
    let readings = UnitKind::ALL
        .into_iter()
        .map(|unit| UnitReading {
            unit,
            value: latest.map(|s| s.value(unit)),
            stability: flags.stability(unit),
        })
        .collect();

    CheckerView {
        readings,
        history: history.entries().to_vec(),
    }
}
