use thiserror::Error;
use vh_check_protocol::UnitKind;

#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("{unit} probe measured a non-finite value: {value}")]
    NonFinite { unit: UnitKind, value: f64 },
    #[error("clock returned a non-finite timestamp: {0}")]
    NonFiniteTimestamp(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("probe_units must be greater than zero")]
    ZeroProbeUnits,
}
