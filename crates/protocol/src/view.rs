use serde::{Deserialize, Serialize};

use crate::sample::Sample;
use crate::unit::UnitKind;

/// Binary display state for a tracked unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Unstable,
}

impl Stability {
    /// Maps a "has changed" flag to its display state.
    pub fn from_changed(changed: bool) -> Self {
        if changed { Self::Unstable } else { Self::Stable }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "✔️ is stable",
            Self::Unstable => "❌ unstable",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Stable => "text-green-500",
            Self::Unstable => "text-red-500",
        }
    }
}

/// The latest value of one unit together with its stability, if tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReading {
    pub unit: UnitKind,
    /// `None` until the first sample is recorded.
    pub value: Option<f64>,
    /// `None` for units that carry no stability flag.
    pub stability: Option<Stability>,
}

impl UnitReading {
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "Loading...".to_string(),
        }
    }
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerView {
    /// One reading per unit, in [`UnitKind::ALL`] order.
    pub readings: Vec<UnitReading>,
    /// Every recorded sample in arrival order.
    pub history: Vec<Sample>,
}

impl CheckerView {
    pub fn reading(&self, unit: UnitKind) -> Option<&UnitReading> {
        self.readings.iter().find(|r| r.unit == unit)
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stability_labels() {
        assert_eq!(Stability::from_changed(false), Stability::Stable);
        assert_eq!(Stability::from_changed(true).label(), "❌ unstable");
        assert_eq!(Stability::Stable.css_class(), "text-green-500");
    }

    #[test]
    fn missing_value_reads_loading() {
        let reading = UnitReading {
            unit: UnitKind::Dvh,
            value: None,
            stability: None,
        };
        assert_eq!(reading.display_value(), "Loading...");
    }

    #[test]
    fn view_serializes_readings_and_history() {
        let view = CheckerView {
            readings: vec![UnitReading {
                unit: UnitKind::Lvh,
                value: Some(8.5),
                stability: Some(Stability::Stable),
            }],
            history: vec![Sample::new(8.5, 7.0, 6.5, 8.5, 12.0)],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["readings"][0]["unit"], "lvh");
        assert_eq!(json["readings"][0]["stability"], "stable");
        assert_eq!(json["history"][0]["timestamp"], 12.0);
    }
}
