use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_PROBE_UNITS: u32 = 100;

/// Options for installing a checker in a host page.
///
/// Every field has a default, so `{}` is a valid options document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerOptions {
    /// Height of the measurement probe in units. The measured pixel height
    /// is divided by this to get pixels per unit.
    pub probe_units: u32,
    /// Sample on `window` resize.
    pub track_resize: bool,
    /// Also sample on `visualViewport` resize, which fires when mobile
    /// toolbars slide in or out.
    pub track_visual_viewport: bool,
}

impl CheckerOptions {
    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_units == 0 {
            return Err(ConfigError::ZeroProbeUnits);
        }
        Ok(())
    }
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            probe_units: DEFAULT_PROBE_UNITS,
            track_resize: true,
            track_visual_viewport: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let options = CheckerOptions::from_json("{}").unwrap();
        assert_eq!(options, CheckerOptions::default());
        assert_eq!(options.probe_units, 100);
        assert!(options.track_resize);
        assert!(!options.track_visual_viewport);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let options = CheckerOptions::from_json(r#"{"track_visual_viewport": true}"#).unwrap();
        assert!(options.track_visual_viewport);
        assert_eq!(options.probe_units, 100);
    }

    #[test]
    fn rejects_zero_probe_units() {
        let err = CheckerOptions::from_json(r#"{"probe_units": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroProbeUnits));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CheckerOptions::from_json("{probe_units").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
