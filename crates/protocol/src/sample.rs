use serde::{Deserialize, Serialize};

use crate::unit::UnitKind;

/// One measurement of all four viewport units.
///
/// Each value is the pixel height of one unit (a 100-unit probe divided by
/// 100). `timestamp` is milliseconds on a monotonic clock, e.g.
/// `performance.now()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub lvh: f64,
    pub dvh: f64,
    pub svh: f64,
    pub vh: f64,
    pub timestamp: f64,
}

impl Sample {
    pub fn new(lvh: f64, dvh: f64, svh: f64, vh: f64, timestamp: f64) -> Self {
        Self {
            lvh,
            dvh,
            svh,
            vh,
            timestamp,
        }
    }

    /// Value measured for `unit`.
    pub fn value(&self, unit: UnitKind) -> f64 {
        match unit {
            UnitKind::Lvh => self.lvh,
            UnitKind::Dvh => self.dvh,
            UnitKind::Svh => self.svh,
            UnitKind::Vh => self.vh,
        }
    }

    /// Whether both samples describe the same layout state.
    ///
    /// Compares the four unit values exactly and ignores `timestamp`.
    pub fn same_values(&self, other: &Sample) -> bool {
        self.lvh == other.lvh
            && self.dvh == other.dvh
            && self.svh == other.svh
            && self.vh == other.vh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_values_ignores_timestamp() {
        let a = Sample::new(10.0, 9.0, 8.0, 9.0, 0.0);
        let b = Sample::new(10.0, 9.0, 8.0, 9.0, 125.5);
        assert!(a.same_values(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn same_values_detects_dvh_change() {
        let a = Sample::new(10.0, 9.0, 8.0, 9.0, 0.0);
        let b = Sample::new(10.0, 7.0, 8.0, 9.0, 5.0);
        assert!(!a.same_values(&b));
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(Sample::new(8.44, 7.5, 6.56, 8.44, 31.2)).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["lvh", "dvh", "svh", "vh", "timestamp"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
