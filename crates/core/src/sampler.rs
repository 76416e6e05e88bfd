use vh_check_protocol::{Sample, UnitKind};

use crate::error::SampleError;

/// Measures the rendered size of viewport units in the host layout engine.
pub trait UnitProbe {
    /// Pixel height of an element that is `amount` units of `unit` tall.
    ///
    /// Implementations may touch the layout tree but must leave it as they
    /// found it.
    fn measure_px(&mut self, unit: UnitKind, amount: u32) -> f64;
}

/// Monotonic clock in milliseconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Produces [`Sample`]s from a probe and a clock.
pub struct Sampler<P, C> {
    probe: P,
    clock: C,
    probe_units: u32,
}

impl<P: UnitProbe, C: Clock> Sampler<P, C> {
    /// `probe_units` must be non-zero; callers validate it through
    /// [`crate::CheckerOptions::validate`].
    pub fn new(probe: P, clock: C, probe_units: u32) -> Self {
        Self {
            probe,
            clock,
            probe_units,
        }
    }

    /// Measure all four units and stamp the result with the current time.
    ///
    /// Fails if any measurement or the clock reading is not a finite number.
    pub fn sample(&mut self) -> Result<Sample, SampleError> {
        let lvh = self.measure(UnitKind::Lvh)?;
        let dvh = self.measure(UnitKind::Dvh)?;
        let svh = self.measure(UnitKind::Svh)?;
        let vh = self.measure(UnitKind::Vh)?;

        let timestamp = self.clock.now();
        if !timestamp.is_finite() {
            return Err(SampleError::NonFiniteTimestamp(timestamp));
        }

        Ok(Sample::new(lvh, dvh, svh, vh, timestamp))
    }

    fn measure(&mut self, unit: UnitKind) -> Result<f64, SampleError> {
        let px = self.probe.measure_px(unit, self.probe_units);
        let value = px / f64::from(self.probe_units);
        if !value.is_finite() {
            return Err(SampleError::NonFinite { unit, value: px });
        }
        Ok(value)
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FixedProbe {
        lvh: f64,
        dvh: f64,
        svh: f64,
        vh: f64,
        calls: Vec<(UnitKind, u32)>,
    }

    impl UnitProbe for FixedProbe {
        fn measure_px(&mut self, unit: UnitKind, amount: u32) -> f64 {
            self.calls.push((unit, amount));
            let per_unit = match unit {
                UnitKind::Lvh => self.lvh,
                UnitKind::Dvh => self.dvh,
                UnitKind::Svh => self.svh,
                UnitKind::Vh => self.vh,
            };
            per_unit * f64::from(amount)
        }
    }

    struct StepClock(Cell<f64>);

    impl Clock for StepClock {
        fn now(&self) -> f64 {
            let t = self.0.get();
            self.0.set(t + 16.0);
            t
        }
    }

    fn probe(lvh: f64, dvh: f64, svh: f64, vh: f64) -> FixedProbe {
        FixedProbe {
            lvh,
            dvh,
            svh,
            vh,
            calls: Vec::new(),
        }
    }

    #[test]
    fn divides_probe_height_by_probe_units() {
        let mut sampler = Sampler::new(
            probe(8.44, 7.5, 6.56, 8.44),
            StepClock(Cell::new(0.0)),
            100,
        );
        let sample = sampler.sample().unwrap();
        assert!((sample.lvh - 8.44).abs() < 1e-9);
        assert!((sample.dvh - 7.5).abs() < 1e-9);
        assert!((sample.svh - 6.56).abs() < 1e-9);
        assert!((sample.vh - 8.44).abs() < 1e-9);
        assert_eq!(sample.timestamp, 0.0);
    }

    #[test]
    fn measures_each_unit_once_per_sample() {
        let mut sampler = Sampler::new(probe(1.0, 1.0, 1.0, 1.0), StepClock(Cell::new(0.0)), 100);
        sampler.sample().unwrap();
        let calls = &sampler.probe().calls;
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(_, amount)| *amount == 100));
        for unit in UnitKind::ALL {
            assert!(calls.iter().any(|(u, _)| *u == unit));
        }
    }

    #[test]
    fn timestamps_come_from_the_clock() {
        let mut sampler = Sampler::new(probe(1.0, 1.0, 1.0, 1.0), StepClock(Cell::new(100.0)), 100);
        assert_eq!(sampler.sample().unwrap().timestamp, 100.0);
        assert_eq!(sampler.sample().unwrap().timestamp, 116.0);
    }

    #[test]
    fn nan_measurement_is_rejected() {
        let mut sampler = Sampler::new(
            probe(1.0, f64::NAN, 1.0, 1.0),
            StepClock(Cell::new(0.0)),
            100,
        );
        let err = sampler.sample().unwrap_err();
        assert!(matches!(err, SampleError::NonFinite { unit: UnitKind::Dvh, .. }));
    }

    #[test]
    fn infinite_timestamp_is_rejected() {
        let mut sampler = Sampler::new(
            probe(1.0, 1.0, 1.0, 1.0),
            StepClock(Cell::new(f64::INFINITY)),
            100,
        );
        assert!(matches!(
            sampler.sample(),
            Err(SampleError::NonFiniteTimestamp(_))
        ));
    }
}
